//! The content tables themselves.

use crate::SETUP_FEE;
use crate::icon::Icon;
use crate::money::Money;
use crate::records::{
    FaqEntry, FeatureItem, FlowStep, PricingPlan, ProcessStep, Stat, Testimonial,
};

pub const STATS: &[Stat] = &[
    Stat { value: "< 14 days", label: "Typical setup time" },
    Stat { value: "30–50%", label: "Lead recovery via follow‑ups" },
    Stat { value: "> 20%", label: "Show‑up rate lift (avg)" },
];

pub const AUTOMATION_FLOW: &[FlowStep] = &[
    FlowStep { icon: Icon::Zap, text: "New Lead Captured → Pipeline: ", highlight: Some("Inbound") },
    FlowStep {
        icon: Icon::Workflow,
        text: "Immediate SMS + Email sequence (personalized)",
        highlight: None,
    },
    FlowStep {
        icon: Icon::CalendarCheck2,
        text: "Smart reminders → Booked call + no‑show rescue",
        highlight: None,
    },
    FlowStep { icon: Icon::BarChart3, text: "Dashboard KPIs + weekly digest", highlight: None },
];

pub const PAIN_POINTS: &[&str] = &[
    "No centralized pipeline → poor visibility",
    "Slow or no follow‑up → cold leads",
    "Manual tasks eat time → missed revenue",
    "No tracking → can’t improve what you can’t see",
];

pub const TESTIMONIAL: Testimonial = Testimonial {
    quote: "We went from missed DMs and no-shows to a reliable pipeline in two weeks. The automations alone paid for the setup in the first month.",
    attribution: "Owner, Local Fitness Studio",
};

pub const FEATURES: &[FeatureItem] = &[
    FeatureItem {
        icon: Icon::Workflow,
        title: "Custom CRM & Pipeline",
        description: "Organized stages from first touch to closed‑won. Zero guesswork on what’s next.",
    },
    FeatureItem {
        icon: Icon::Zap,
        title: "Base Automation Suite",
        description: "Instant lead response, smart reminders, review requests, and no‑show recovery.",
    },
    FeatureItem {
        icon: Icon::BarChart3,
        title: "Tracking & Reporting",
        description: "KPI dashboard and weekly summary so you always know what’s working.",
    },
    FeatureItem {
        icon: Icon::Shield,
        title: "Data Hygiene + QA",
        description: "Validation, deduping, and monitoring to keep your system clean and reliable.",
    },
];

pub const INTEGRATION_CHECKLIST: &[&str] = &[
    "Migrate existing contacts + pipeline",
    "Preserve current booking links and SMS numbers",
    "Add tracking + UTM templates",
];

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        ordinal: "1",
        title: "Blueprint",
        description: "30‑min intake, goals, and mapping current lead sources.",
    },
    ProcessStep {
        ordinal: "2",
        title: "Build",
        description: "CRM + pipeline + automations tailored from our proven template.",
    },
    ProcessStep {
        ordinal: "3",
        title: "Integrate",
        description: "Connect forms, calendars, email/SMS; import contacts; QA.",
    },
    ProcessStep {
        ordinal: "4",
        title: "Launch",
        description: "Go live with tracking, alerts, and weekly KPI reporting.",
    },
];

pub const INCLUDED: &[&str] = &[
    "Custom pipeline + statuses + reasons",
    "Inbound + outbound follow‑up sequences",
    "No‑show rescue + review request",
    "Unified inbox + templates + AI assist",
    "UTM + source tracking + dashboard",
    "Playbook Loom + quick SOPs",
];

/// Ordered Starter -> Core -> Pro.
pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        slug: "starter",
        name: "Starter",
        monthly: Money::dollars(0),
        setup_fee: SETUP_FEE,
        summary: "We set it up, you run it. Best for teams who want full control after launch.",
        included: &[
            "Custom CRM, pipeline, and roles",
            "Base automations (lead reply, reminders, reviews)",
            "Integrations, import, QA",
            "Tracking dashboard + SOPs",
        ],
        recommended: false,
        cta: "Start with Starter",
        footnote: None,
    },
    PricingPlan {
        slug: "core",
        name: "Core",
        monthly: Money::dollars(500),
        setup_fee: SETUP_FEE,
        summary: "Everything in Starter plus ongoing management so you never miss a lead.",
        included: &[
            "Inbox triage + SLA follow‑ups",
            "List hygiene + pipeline QA",
            "Offer/sequence testing",
            "Monthly reporting + insights",
        ],
        recommended: true,
        cta: "Choose Core",
        footnote: Some("Month‑to‑month after first 30 days."),
    },
    PricingPlan {
        slug: "pro",
        name: "Pro",
        monthly: Money::dollars(1_500),
        setup_fee: SETUP_FEE,
        summary: "Core management plus ongoing custom automations for next‑level scaling.",
        included: &[
            "Everything in Core",
            "2 custom automations per month",
            "Priority implementation queue",
            "Quarterly strategy workshop",
        ],
        recommended: false,
        cta: "Go Pro",
        footnote: None,
    },
];

pub const BOOKING_PERKS: &[&str] = &[
    "30‑min discovery + live system preview",
    "Clear scope, flat pricing, fast implementation",
    "No pressure. We only work with good fits",
];

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "How long does setup take?",
        answer: "Typical turnaround is 7–14 days depending on complexity and integrations.",
    },
    FaqEntry {
        question: "Can you work with my existing CRM?",
        answer: "Yes. We can migrate or enhance what you have, but our templates are optimized for GoHighLevel.",
    },
    FaqEntry {
        question: "Is ongoing management required?",
        answer: "No. The monthly plan is optional. Many clients start with setup, then add management once they see results.",
    },
    FaqEntry {
        question: "What about texting and phone numbers?",
        answer: "We support existing numbers where possible or help you provision new ones with proper compliance settings.",
    },
    FaqEntry {
        question: "Do you integrate ads + tracking?",
        answer: "Yes. We add UTM templates and conversion tracking so you can attribute revenue to source/campaign.",
    },
];
