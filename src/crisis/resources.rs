use serde::Serialize;

use super::types::CrisisLevel;

/// Whether a resource is for immediate danger or ongoing support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Immediate,
    Support,
}

/// One help line. Rendered for display as `"{name}: {contact}"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportResource {
    pub name: &'static str,
    pub contact: &'static str,
    pub description: &'static str,
    /// `tel:` / `sms:` link for the collaborator UI.
    pub href: &'static str,
    pub kind: ResourceKind,
}

impl std::fmt::Display for SupportResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.contact)
    }
}

// ── Directory ───────────────────────────────────────────────

pub const LIFELINE: SupportResource = SupportResource {
    name: "National Suicide Prevention Lifeline",
    contact: "988",
    description: "Free, confidential support 24/7",
    href: "tel:988",
    kind: ResourceKind::Immediate,
};

pub const CRISIS_TEXT_LINE: SupportResource = SupportResource {
    name: "Crisis Text Line",
    contact: "Text HOME to 741741",
    description: "Free, 24/7 crisis counseling via text",
    href: "sms:741741&body=HOME",
    kind: ResourceKind::Immediate,
};

pub const EMERGENCY_SERVICES: SupportResource = SupportResource {
    name: "Emergency Services",
    contact: "911",
    description: "For immediate danger or medical emergencies",
    href: "tel:911",
    kind: ResourceKind::Immediate,
};

pub const SAMHSA_HELPLINE: SupportResource = SupportResource {
    name: "SAMHSA National Helpline",
    contact: "1-800-662-4357",
    description: "Treatment referral and information service",
    href: "tel:18006624357",
    kind: ResourceKind::Support,
};

pub const NAMI_HELPLINE: SupportResource = SupportResource {
    name: "NAMI HelpLine",
    contact: "1-800-950-6264",
    description: "National Alliance on Mental Illness support",
    href: "tel:18009506264",
    kind: ResourceKind::Support,
};

pub const VETERANS_CRISIS_LINE: SupportResource = SupportResource {
    name: "Veterans Crisis Line",
    contact: "1-800-273-8255",
    description: "24/7 support for veterans and their families",
    href: "tel:18002738255",
    kind: ResourceKind::Support,
};

pub const LGBT_NATIONAL_HOTLINE: SupportResource = SupportResource {
    name: "LGBT National Hotline",
    contact: "1-888-843-4564",
    description: "Support for LGBTQ+ individuals",
    href: "tel:18888434564",
    kind: ResourceKind::Support,
};

pub const TEEN_LINE: SupportResource = SupportResource {
    name: "Teen Line",
    contact: "1-800-852-8336",
    description: "Teens helping teens",
    href: "tel:18008528336",
    kind: ResourceKind::Support,
};

static IMMEDIATE: [SupportResource; 3] = [LIFELINE, CRISIS_TEXT_LINE, EMERGENCY_SERVICES];
static SUPPORT: [SupportResource; 2] = [SAMHSA_HELPLINE, NAMI_HELPLINE];
static IMMEDIATE_AND_SUPPORT: [SupportResource; 5] = [
    LIFELINE,
    CRISIS_TEXT_LINE,
    EMERGENCY_SERVICES,
    SAMHSA_HELPLINE,
    NAMI_HELPLINE,
];
static DIRECTORY: [SupportResource; 8] = [
    LIFELINE,
    CRISIS_TEXT_LINE,
    EMERGENCY_SERVICES,
    SAMHSA_HELPLINE,
    NAMI_HELPLINE,
    VETERANS_CRISIS_LINE,
    LGBT_NATIONAL_HOTLINE,
    TEEN_LINE,
];

impl SupportResource {
    /// Every known help line, for a "show all resources" view.
    pub fn directory() -> &'static [SupportResource] {
        &DIRECTORY
    }
}

/// Resources surfaced for a level. `Low` gets support lines only, with no
/// emergency escalation.
pub fn resources_for(level: CrisisLevel) -> &'static [SupportResource] {
    match level {
        CrisisLevel::High => &IMMEDIATE,
        CrisisLevel::Medium => &IMMEDIATE_AND_SUPPORT,
        CrisisLevel::Low => &SUPPORT,
        CrisisLevel::None => &[],
    }
}

/// Display lines for a level.
pub fn resource_lines(level: CrisisLevel) -> Vec<String> {
    resources_for(level).iter().map(ToString::to_string).collect()
}
