use serde::Serialize;
use strum_macros::{AsRefStr, EnumIter};

/// Icon identifiers from the lucide set.
///
/// `as_ref()` yields the lucide name the browser-side script expects in `data-lucide`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Check,
    ArrowRight,
    Zap,
    #[strum(serialize = "bar-chart-3")]
    #[serde(rename = "bar-chart-3")]
    BarChart3,
    Workflow,
    #[strum(serialize = "calendar-check-2")]
    #[serde(rename = "calendar-check-2")]
    CalendarCheck2,
    Shield,
    Users,
    Sparkles,
    Quote,
    ChevronRight,
}
