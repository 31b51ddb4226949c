//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, Gauge, GraphType, Paragraph};

use crate::dashboard::{FlowArrows, SkyPhase, bar_height_pct, bar_scale_max, energy_bars};
use crate::sim::types::EnergyFlow;

use super::runtime::{App, View};
use super::style;

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // header
            Constraint::Length(14), // bars + flows
            Constraint::Min(6),     // day chart or preset list
            Constraint::Length(1),  // footer
        ])
        .split(frame.area());

    let flow = app.current_flow();
    render_header(frame, app, chunks[0]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);
    render_bars(frame, &flow, app.show_battery(), middle[0]);
    render_flows(frame, &flow, middle[1]);

    match app.view {
        View::Clock => render_day_chart(frame, app, chunks[2]),
        View::Scenario => render_presets(frame, app, chunks[2]),
    }
    render_footer(frame, chunks[3]);
}

/// Header bar: view, time or preset, play state.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let (detail, accent) = match app.view {
        View::Clock => {
            let reading = app.clock.reading();
            let state = if app.clock.is_playing() { "▶ PLAYING" } else { "‖ PAUSED" };
            (
                format!(" {} │ {state} ", reading.formatted_time),
                style::sky_color(SkyPhase::of(&reading)),
            )
        }
        View::Scenario => {
            let preset = app.scenario.current_preset();
            let settings = app.scenario.settings();
            let sky = if preset.id.is_night_scene() {
                SkyPhase::Night
            } else {
                SkyPhase::Day
            };
            (
                format!(
                    " {} │ EV {} │ battery {} ",
                    preset.label,
                    if settings.ev { "on" } else { "off" },
                    if settings.battery { "on" } else { "off" },
                ),
                style::sky_color(sky),
            )
        }
    };

    let header = Line::from(vec![
        Span::styled(
            " HOME SOLAR ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            app.view.title(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::raw(detail),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// One horizontal gauge per energy bar.
fn render_bars(frame: &mut Frame, flow: &EnergyFlow, show_battery: bool, area: Rect) {
    let block = Block::default().title(" Energy ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let bars = energy_bars(flow, show_battery);
    let max = bar_scale_max(flow, show_battery);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(bars.iter().map(|_| Constraint::Length(3)))
        .split(inner);

    for (bar, row) in bars.iter().zip(rows.iter()) {
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title(format!(" {} · {} ", bar.label, bar.subtitle))
                    .borders(Borders::NONE),
            )
            .gauge_style(Style::default().fg(style::tone_color(bar.tone)))
            .ratio(bar_height_pct(bar, max) / 100.0)
            .label(format!("{:.1} {}", bar.value, bar.unit));
        frame.render_widget(gauge, *row);
    }
}

/// Textual flow diagram: active paths are highlighted.
fn render_flows(frame: &mut Frame, flow: &EnergyFlow, area: Rect) {
    let arrows = FlowArrows::from_flow(flow);
    let path = |active: bool, text: String| {
        let color = if active { style::HEADER_FG } else { style::IDLE_FG };
        Line::from(Span::styled(text, Style::default().fg(color)))
    };

    let lines = vec![
        path(
            arrows.solar_to_inverter,
            format!("  ☀ solar → inverter   {:>6.2} kW", flow.pv_kw),
        ),
        path(
            arrows.inverter_to_home,
            format!("  ⌂ inverter → home    {:>6.2} kW", flow.load_kw),
        ),
        path(
            arrows.grid_import,
            format!("  ⚡ grid → home        {:>6.2} kW", flow.grid_kw.max(0.0)),
        ),
        path(
            arrows.grid_export,
            format!("  ⚡ home → grid        {:>6.2} kW", (-flow.grid_kw).max(0.0)),
        ),
        path(
            arrows.battery_charge,
            format!("  ▮ → battery          {:>6.2} kW", flow.battery_kw.max(0.0)),
        ),
        path(
            arrows.battery_discharge,
            format!("  ▮ battery →          {:>6.2} kW", (-flow.battery_kw).max(0.0)),
        ),
        Line::from(""),
        Line::from(format!("  SoC {:.0}% ({})", flow.soc_pct, flow.battery_state)),
    ];

    let paragraph =
        Paragraph::new(lines).block(Block::default().title(" Flows ").borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// Solar and load over the day with a marker at the current time.
fn render_day_chart(frame: &mut Frame, app: &App, area: Rect) {
    let solar: Vec<(f64, f64)> = app.day.iter().map(|r| (r.hour, r.flow.pv_kw)).collect();
    let load: Vec<(f64, f64)> = app.day.iter().map(|r| (r.hour, r.flow.load_kw)).collect();
    let y_max = solar
        .iter()
        .chain(load.iter())
        .map(|&(_, y)| y)
        .fold(1.0, f64::max)
        .ceil();
    let now = app.clock.reading().hour;
    let marker = [(now, 0.0), (now, y_max)];

    let datasets = vec![
        Dataset::default()
            .name("Solar")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(style::SOLAR_COLOR))
            .data(&solar),
        Dataset::default()
            .name("Load")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(style::LOAD_COLOR))
            .data(&load),
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(style::MARKER_COLOR))
            .data(&marker),
    ];

    let chart = Chart::new(datasets)
        .block(Block::default().title(" Day ").borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .title("h")
                .bounds([0.0, 24.0])
                .labels(vec!["0", "6", "12", "18", "24"]),
        )
        .y_axis(
            Axis::default()
                .title("kW")
                .bounds([0.0, y_max])
                .labels(vec!["0".to_string(), format!("{y_max:.0}")]),
        );
    frame.render_widget(chart, area);
}

/// Preset menu with the active entry highlighted.
fn render_presets(frame: &mut Frame, app: &App, area: Rect) {
    let active = app.scenario.active();
    let lines: Vec<Line> = app
        .scenario
        .presets()
        .iter()
        .zip(1..)
        .map(|(preset, key)| {
            let style = if preset.id == active {
                Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default()
            };
            Line::from(Span::styled(
                format!("  {key}  {:<10} {}", preset.label, preset.icon),
                style,
            ))
        })
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().title(" Scenarios ").borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// Footer with keybinding hints.
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        " q:Quit  Tab:View  Space:Play  ←/→:Scrub  1-4:Scene  e:EV  b:Battery",
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}
