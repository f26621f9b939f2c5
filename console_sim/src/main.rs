use std::io;
use std::io::Stdout;
use std::thread::sleep;
use std::time::Duration;

use crossterm::event::{poll, read, Event as CEvent, KeyCode};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use tui::backend::CrosstermBackend;
use tui::layout::{Constraint, Direction, Layout};
use tui::style::{Color, Style};
use tui::text::{Span, Spans};
use tui::widgets::{Block, BorderType, Borders, Paragraph};
use tui::Terminal;

use pack_monitor::control::PackMonitor;

use crate::keyboard_button::KeyboardButton;
use crate::lcd_panel::LcdPanel;
use crate::sim_alerts::SimAlerts;
use crate::sim_clock::SimClock;
use crate::sim_pack::SimPack;

mod keyboard_button;
mod lcd_panel;
mod sim_alerts;
mod sim_clock;
mod sim_pack;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let pack = SimPack::create([4.0, 4.0, 4.0, 4.0]);
    let button = KeyboardButton::create();
    let alerts = SimAlerts::create();
    let lcd = LcdPanel::create();
    let clock = SimClock::create();

    let monitor = PackMonitor::new(button.clone(), &pack, &alerts, &lcd, &clock);

    enable_raw_mode().expect("can run in raw mode");
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut selected = 0;
    loop {
        if poll(Duration::from_millis(10))? {
            if let CEvent::Key(key) = read()? {
                match key.code {
                    KeyCode::Esc | KeyCode::Char('q') => break,
                    KeyCode::Char('m') | KeyCode::Char(' ') => button.press(),
                    KeyCode::Char(c @ '1'..='4') => selected = c as usize - '1' as usize,
                    KeyCode::Up | KeyCode::Char('+') => pack.adjust(selected, 0.05),
                    KeyCode::Down | KeyCode::Char('-') => pack.adjust(selected, -0.05),
                    _ => {}
                }
            }
        }

        monitor.step();
        draw_tui(&mut terminal, &pack, &lcd, &alerts, selected)?;
        sleep(Duration::from_millis(10));
    }

    disable_raw_mode().expect("can go back to normal");

    Ok(())
}

fn draw_tui(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    pack: &SimPack,
    lcd: &LcdPanel,
    alerts: &SimAlerts,
    selected: usize,
) -> io::Result<()> {
    terminal.draw(|rect| {
        let size = rect.size();
        let vertical_layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints(
                [
                    Constraint::Length(4),
                    Constraint::Length(3),
                    Constraint::Min(8),
                ]
                .as_ref(),
            )
            .split(size);

        let lcd_paragraph = Paragraph::new(vec![
            Spans::from(Span::raw(lcd.line(0))),
            Spans::from(Span::raw(lcd.line(1))),
        ])
        .block(
            Block::default()
                .title(" 16x2 LCD ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

        let cell_flags = alerts.cell_alerts();
        let mut lamp_spans = vec![];
        for i in 0..4 {
            lamp_spans.push(Span::styled(
                format!(" CELL{} ", i + 1),
                lamp_style(cell_flags[i]),
            ));
            lamp_spans.push(Span::raw(" "));
        }
        lamp_spans.push(Span::styled(" CRITICAL ", lamp_style(alerts.critical())));
        let lamps_paragraph = Paragraph::new(Spans::from(lamp_spans)).block(
            Block::default()
                .title(" alert outputs ")
                .borders(Borders::ALL),
        );

        let cells = pack.cell_voltages();
        let mut pack_lines = vec![];
        for i in 0..4 {
            let marker = if i == selected { ">" } else { " " };
            pack_lines.push(Spans::from(Span::raw(format!(
                "{} cell {}: {:.2} V",
                marker,
                i + 1,
                cells[i]
            ))));
        }
        pack_lines.push(Spans::from(Span::raw("")));
        pack_lines.push(Spans::from(Span::raw(
            "1-4 select cell, up/down adjust, m cycle mode, q quit",
        )));
        let pack_paragraph = Paragraph::new(pack_lines).block(
            Block::default()
                .title(" simulated pack ")
                .borders(Borders::ALL),
        );

        rect.render_widget(lcd_paragraph, vertical_layout[0]);
        rect.render_widget(lamps_paragraph, vertical_layout[1]);
        rect.render_widget(pack_paragraph, vertical_layout[2]);
    })?;
    Ok(())
}

fn lamp_style(on: bool) -> Style {
    if on {
        Style::default().bg(Color::Red).fg(Color::Black)
    } else {
        Style::default().bg(Color::DarkGray)
    }
}
