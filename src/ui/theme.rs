//! Shared class strings so pages stay visually consistent.

use crate::domain::{CostComponent, MarginStatus};

// ============================================
// BUTTONS
// ============================================

pub const BTN_PRIMARY: &str =
    "rounded-lg bg-emerald-600 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-white hover:bg-emerald-500";

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "min-w-[5.5rem] rounded-lg border border-emerald-500/60 bg-emerald-500/15 px-4 py-2 font-semibold text-emerald-300 forest-glow"
    } else {
        "min-w-[5.5rem] rounded-lg border border-slate-700 px-4 py-2 text-slate-400 transition hover:border-emerald-700 hover:bg-emerald-900/20 hover:text-emerald-300"
    }
}

// ============================================
// INPUTS
// ============================================

pub fn input_class(invalid: bool) -> &'static str {
    if invalid {
        "mt-1 w-full rounded-lg border border-rose-500/70 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-rose-400 focus:outline-none"
    } else {
        "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-emerald-500 focus:outline-none"
    }
}

pub const LABEL: &str = "block text-xs font-semibold uppercase text-slate-500";

// ============================================
// PANELS / TABLES
// ============================================

pub const PANEL: &str = "rounded-xl border border-slate-800 bg-slate-900/40";
pub const SECTION_TITLE: &str = "text-sm font-semibold uppercase tracking-wide text-slate-500";
pub const TABLE_CONTAINER: &str = "rounded-xl border border-slate-800 bg-slate-900/40 overflow-hidden";
pub const TABLE_HEADER: &str = "border-b border-slate-800 bg-slate-900/60 text-xs uppercase text-slate-500";
pub const TABLE_DIVIDER: &str = "divide-y divide-slate-800";
pub const TEXT_MUTED: &str = "text-slate-500";

/// Green for gains, rose for losses.
pub fn signed_text(value: f64) -> &'static str {
    if value < 0.0 {
        "text-rose-300"
    } else {
        "text-emerald-300"
    }
}

// ============================================
// CHART COLOURS
// ============================================

pub fn component_color(component: CostComponent) -> &'static str {
    match component {
        CostComponent::Logistics => "#38bdf8",
        CostComponent::Production => "#f59e0b",
        CostComponent::Overhead => "#a78bfa",
    }
}

pub const START_COLOR: &str = "#22c55e";
pub const PROFIT_COLOR: &str = "#10b981";
pub const LOSS_COLOR: &str = "#f43f5e";

pub fn margin_badge(status: MarginStatus) -> &'static str {
    match status {
        MarginStatus::Healthy => "border-emerald-500/40 bg-emerald-500/10 text-emerald-200",
        MarginStatus::Watch => "border-amber-500/40 bg-amber-500/10 text-amber-200",
        MarginStatus::Loss => "border-rose-500/40 bg-rose-500/10 text-rose-200",
    }
}
