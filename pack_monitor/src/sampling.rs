use crate::bsp::adc::Adc;

/// Arithmetic mean of [readings] consecutive raw reads from one channel.
/// Burns sampling bandwidth for noise reduction. The sum stays well
/// inside u32 at 10-bit resolution.
pub fn average(adc: &dyn Adc, channel: usize, readings: u16) -> u16 {
    let mut sum: u32 = 0;
    for _ in 0..readings {
        sum += adc.read_raw(channel) as u32;
    }
    (sum / readings as u32) as u16
}
