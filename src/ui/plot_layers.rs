use eframe::egui::{Color32, Stroke};
use egui_plot::{HLine, Line, LineStyle, MarkerShape, PlotPoints, PlotUi, Points, Polygon, VLine};

use crate::chart::transform::{finite_runs, money_flow_runs, stoch_runs};
use crate::chart::{ChartBundle, MarkerGroup};
use crate::config::{ANALYSIS, PLOT_CONFIG};
use crate::domain::{Polarity, SignalFamily, SignalKind, TimePoint};
use crate::ui::app::LayerVisibility;
use crate::ui::config::UI_TEXT;
use crate::utils::time_utils::to_plot_x;

/// Context passed to every layer during rendering.
/// This prevents argument explosion.
pub struct LayerContext<'a> {
    pub bundle: &'a ChartBundle,
    pub visibility: &'a LayerVisibility,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// PRICE PANEL
// ============================================================================
pub struct PriceLineLayer;

impl PlotLayer for PriceLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        draw_series(
            plot_ui,
            UI_TEXT.label_price,
            &ctx.bundle.price,
            PLOT_CONFIG.price_color,
            PLOT_CONFIG.line_width,
        );
    }
}

/// One labeled vertical line per retained buy / gold-buy / sell event.
pub struct SignalLineLayer;

impl PlotLayer for SignalLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if !ctx.visibility.signal_lines {
            return;
        }
        for marker in &ctx.bundle.annotations.vertical_markers {
            let color = PLOT_CONFIG
                .signal_color(marker.kind)
                .linear_multiply(PLOT_CONFIG.marker_line_opacity_pct);
            plot_ui.vline(
                VLine::new(&marker.label, to_plot_x(&marker.timestamp))
                    .color(color)
                    .width(PLOT_CONFIG.thin_line_width)
                    .style(LineStyle::dashed_loose()),
            );
        }
    }
}

// ============================================================================
// OSCILLATOR PANEL
// ============================================================================

/// Filled band between WT1 and the WT2 baseline.
pub struct WaveTrendBandLayer;

impl PlotLayer for WaveTrendBandLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if !ctx.visibility.wt_fill {
            return;
        }
        let fill = PLOT_CONFIG
            .wt_fill_color
            .linear_multiply(PLOT_CONFIG.fill_opacity_pct);
        for quad in ctx.bundle.wt_fill.quads() {
            plot_ui.polygon(
                Polygon::new(UI_TEXT.label_wt_fill, PlotPoints::new(quad.to_vec()))
                    .fill_color(fill)
                    .stroke(Stroke::NONE),
            );
        }
    }
}

pub struct WaveTrendLayer;

impl PlotLayer for WaveTrendLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        draw_series(
            plot_ui,
            UI_TEXT.label_wt1,
            &ctx.bundle.wt1,
            PLOT_CONFIG.wt1_color,
            PLOT_CONFIG.line_width,
        );
        draw_series(
            plot_ui,
            UI_TEXT.label_wt2,
            &ctx.bundle.wt2,
            PLOT_CONFIG.wt2_color,
            PLOT_CONFIG.thin_line_width,
        );
    }
}

/// VWAP, RSI, and the StochRSI line colored against RSI.
pub struct MomentumLayer;

impl PlotLayer for MomentumLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let visibility = ctx.visibility;
        if visibility.vwap {
            draw_series(
                plot_ui,
                UI_TEXT.label_vwap,
                &ctx.bundle.wt_vwap,
                PLOT_CONFIG.vwap_color,
                PLOT_CONFIG.thin_line_width,
            );
        }
        if visibility.rsi {
            draw_series(
                plot_ui,
                UI_TEXT.label_rsi,
                &ctx.bundle.rsi,
                PLOT_CONFIG.rsi_color,
                PLOT_CONFIG.thin_line_width,
            );
        }
        if visibility.stoch {
            for (polarity, run) in stoch_runs(&ctx.bundle.stoch) {
                plot_ui.line(
                    Line::new(UI_TEXT.label_stoch, PlotPoints::new(run))
                        .color(PLOT_CONFIG.stoch_color(polarity))
                        .width(PLOT_CONFIG.thin_line_width),
                );
            }
        }
    }
}

/// Horizontal reference lines at the WaveTrend zone levels.
pub struct ZoneLevelLayer;

impl PlotLayer for ZoneLevelLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if !ctx.visibility.zone_levels {
            return;
        }
        let levels = &ANALYSIS.wavetrend;
        for (y, style) in [
            (levels.overbought_1, LineStyle::dashed_loose()),
            (levels.overbought_2, LineStyle::dotted_loose()),
            (levels.oversold_1, LineStyle::dashed_loose()),
            (levels.oversold_2, LineStyle::dotted_loose()),
        ] {
            plot_ui.hline(
                HLine::new(UI_TEXT.label_zone_levels, y)
                    .color(PLOT_CONFIG.level_line_color)
                    .width(PLOT_CONFIG.thin_line_width)
                    .style(style),
            );
        }
        plot_ui.hline(
            HLine::new(UI_TEXT.label_zone_levels, 0.0)
                .color(PLOT_CONFIG.level_line_color.linear_multiply(0.5))
                .width(PLOT_CONFIG.thin_line_width),
        );
    }
}

/// Category, divergence and pattern groups at their fixed offsets, crosses at their own value.
pub struct SignalMarkerLayer;

impl PlotLayer for SignalMarkerLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let annotations = &ctx.bundle.annotations;
        let visibility = ctx.visibility;
        for group in annotations
            .marker_groups
            .iter()
            .chain(&annotations.secondary_groups)
        {
            let visible = match group.kind.family() {
                SignalFamily::Divergence => visibility.divergences,
                SignalFamily::Pattern => visibility.patterns,
                _ => visibility.marker_groups,
            };
            if visible {
                let color = PLOT_CONFIG.signal_color(group.kind);
                draw_group(plot_ui, group, color, marker_shape(group.kind));
            }
        }
        if visibility.crosses {
            for group in [&annotations.red_crosses, &annotations.green_crosses] {
                let color = group
                    .polarity
                    .map(|p| PLOT_CONFIG.cross_color(p))
                    .unwrap_or(PLOT_CONFIG.level_line_color);
                draw_group(plot_ui, group, color, MarkerShape::Circle);
            }
        }
    }
}

// ============================================================================
// MONEY FLOW PANEL
// ============================================================================
pub struct MoneyFlowLayer;

impl PlotLayer for MoneyFlowLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for (polarity, run) in money_flow_runs(&ctx.bundle.money_flow) {
            let color = PLOT_CONFIG.money_flow_color(polarity);
            plot_ui.line(
                Line::new(UI_TEXT.label_money_flow, PlotPoints::new(run))
                    .color(color)
                    .width(PLOT_CONFIG.thin_line_width)
                    .fill(0.0),
            );
        }
        plot_ui.hline(
            HLine::new(UI_TEXT.label_money_flow, 0.0)
                .color(PLOT_CONFIG.level_line_color)
                .width(PLOT_CONFIG.thin_line_width),
        );
    }
}

// ============================================================================
// TREND EXHAUST PANEL
// ============================================================================
pub struct ExhaustLayer;

impl PlotLayer for ExhaustLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let cfg = &ANALYSIS.exhaustion;
        for (label, y) in [
            (UI_TEXT.label_overbought, cfg.overbought_level),
            (UI_TEXT.label_oversold, cfg.oversold_level),
        ] {
            plot_ui.hline(
                HLine::new(label, y)
                    .color(PLOT_CONFIG.level_line_color)
                    .width(PLOT_CONFIG.thin_line_width)
                    .style(LineStyle::dashed_loose()),
            );
        }
        let bundle = ctx.bundle;
        for (label, series, color) in [
            (
                UI_TEXT.label_short_percent_r,
                &bundle.short_percent_r,
                PLOT_CONFIG.short_percent_r_color,
            ),
            (
                UI_TEXT.label_long_percent_r,
                &bundle.long_percent_r,
                PLOT_CONFIG.long_percent_r_color,
            ),
        ] {
            draw_series(plot_ui, label, series, color, PLOT_CONFIG.thin_line_width);
        }
        draw_series(
            plot_ui,
            UI_TEXT.label_avg_percent_r,
            &ctx.bundle.avg_percent_r,
            PLOT_CONFIG.exhaust_color,
            PLOT_CONFIG.line_width,
        );
    }
}

// ============================================================================
// HELPER FUNCTIONS (Private to this module)
// ============================================================================

// One Line per renderable run so gaps stay visible.
fn draw_series(plot_ui: &mut PlotUi, name: &str, points: &[TimePoint], color: Color32, width: f32) {
    for run in finite_runs(points) {
        plot_ui.line(
            Line::new(name, PlotPoints::new(run))
                .color(color)
                .width(width),
        );
    }
}

fn marker_shape(kind: SignalKind) -> MarkerShape {
    let bearish = kind.polarity() == Some(Polarity::Bearish);
    match kind.family() {
        SignalFamily::Divergence => MarkerShape::Square,
        SignalFamily::Pattern => MarkerShape::Asterisk,
        SignalFamily::Cross => MarkerShape::Circle,
        SignalFamily::Primary if kind == SignalKind::GoldBuy => MarkerShape::Diamond,
        SignalFamily::Primary if bearish => MarkerShape::Down,
        SignalFamily::Primary => MarkerShape::Up,
    }
}

fn draw_group(plot_ui: &mut PlotUi, group: &MarkerGroup, color: Color32, shape: MarkerShape) {
    let points: Vec<[f64; 2]> = group
        .points
        .iter()
        .filter(|p| p.is_renderable())
        .map(TimePoint::to_plot)
        .collect();
    if points.is_empty() {
        return;
    }
    plot_ui.points(
        Points::new(&group.name, PlotPoints::new(points))
            .color(color)
            .shape(shape)
            .filled(true)
            .radius(PLOT_CONFIG.signal_marker_radius(group.kind)),
    );
}
