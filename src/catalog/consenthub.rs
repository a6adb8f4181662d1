//! Встроенный каталог озвучки для роликов ConsentHub.

use crate::catalog::models::{ScriptCatalog, ScriptGroup};
use crate::error::Result;

/// Полная версия обзора (около 7.5 минут)
pub const FULL_SCRIPTS: &[(&str, &str)] = &[
    (
        "logo-intro",
        "ConsentHub. HIPAA-compliant consent management, built for Microsoft Dynamics 365.",
    ),
    (
        "problem-scene",
        "Healthcare organisations are drowning in paper consent forms. Forms get lost, misfiled, or expire without anyone noticing. Manual data entry into Dynamics creates errors and dangerous compliance gaps. Without a proper audit trail, you're one failed HIPAA audit away from serious legal consequences. And patients? They have no way to manage their own consent preferences. The current system is fundamentally broken.",
    ),
    (
        "solution-scene",
        "ConsentHub changes everything. Capture legally binding consent with digital signatures, right from any device. Every record syncs in real time with Microsoft Dynamics 365, both directions, automatically. An immutable audit trail, secured with SHA-256 checksums, ensures absolute regulatory compliance. And patients get their own self-service portal to manage preferences on their terms. This is consent management, done properly.",
    ),
    (
        "dashboard-demo",
        "Your entire consent operation, in a single dashboard. See total patients, active consents, pending reviews, and compliance scores at a glance. Interactive charts show consent trends over time, broken down by type. The activity feed gives you a real-time stream of every consent action across your organisation. Filter, search, and drill into any record instantly. Complete visibility, zero guesswork.",
    ),
    (
        "consent-wizard",
        "Capturing consent takes just three steps. First, select from your library of pre-built, regulation-compliant templates. HIPAA treatment consent, research participation, data sharing — they're all ready to go. Next, the patient signs digitally, right on screen. Legally binding and instantly verified. And finally, confirmation. The consent is recorded, a PDF is generated automatically, and the record syncs to Dynamics 365 in under 200 milliseconds. What used to take days now takes seconds.",
    ),
    (
        "sync-visualization",
        "Real-time, bi-directional integration with Microsoft Dynamics 365. When a consent is captured in ConsentHub, it appears in Dynamics immediately. When a contact is updated in Dynamics, ConsentHub reflects the change automatically. Consent records, PDF documents, and audit entries flow seamlessly between systems. Average sync latency: under 200 milliseconds. No batch jobs. No overnight imports. No data discrepancies. Ever.",
    ),
    (
        "audit-trail",
        "Every action is logged. Every record is verifiable. ConsentHub maintains an immutable audit trail that cannot be altered or deleted. Each entry is protected with a SHA-256 cryptographic checksum. One click verification confirms that no record has been tampered with. When the auditors arrive, you're not scrambling for paperwork. You're showing them a verified, tamper-proof digital record. HIPAA compliance, guaranteed.",
    ),
    (
        "pricing-comparison",
        "Enterprise-grade compliance shouldn't require an enterprise budget. Our Starter plan begins at just 600 dollars per month, perfect for single-location practices. The Professional plan, our most popular, gives you the full platform including Dynamics integration and advanced analytics for 1,200 dollars per month. And for large health systems, our Enterprise plan delivers unlimited scale, custom integrations, and dedicated support. That's 60 to 80 percent less than traditional enterprise consent platforms.",
    ),
    (
        "feature-grid",
        "Six powerful capabilities in one unified platform. A consent engine with legally binding digital signatures. Native Dynamics 365 integration with real-time bi-directional sync. Built-in HIPAA and GDPR compliance with immutable audit logs. A patient self-service portal with secure magic-link access. A comprehensive admin dashboard with real-time analytics. And a full REST API with webhooks for custom integrations. Everything you need. Nothing you don't.",
    ),
    (
        "cta-endcard",
        "Ready to modernise your consent workflow? Visit consenthub.io to schedule a personalised demo and see ConsentHub in action.",
    ),
];

/// Двухминутная демо-версия
pub const BRIEF_SCRIPTS: &[(&str, &str)] = &[
    (
        "logo-intro-brief",
        "ConsentHub. HIPAA-compliant consent management for Dynamics 365.",
    ),
    (
        "problem-scene-brief",
        "Paper consent forms are unreliable. Manual entry creates compliance gaps. And without a proper audit trail, HIPAA violations are a real risk.",
    ),
    (
        "solution-scene-brief",
        "ConsentHub delivers digital signatures, real-time Dynamics sync, immutable audit trails, and a patient self-service portal.",
    ),
    (
        "dashboard-demo-brief",
        "Monitor your entire consent operation from one dashboard. Metrics, charts, and activity streams, all in real time.",
    ),
    (
        "consent-wizard-brief",
        "Three steps. Select a template, capture the signature, and confirm. The record syncs to Dynamics in under 200 milliseconds.",
    ),
    (
        "sync-visualization-brief",
        "Bi-directional Dynamics 365 integration. Consent records, documents, and audit entries sync instantly between systems.",
    ),
    (
        "audit-trail-brief",
        "Every action is logged with SHA-256 checksums. One-click verification proves no record has been tampered with.",
    ),
    (
        "feature-grid-brief",
        "Six core capabilities: consent engine, Dynamics integration, HIPAA compliance, patient portal, admin dashboard, and full API.",
    ),
    (
        "pricing-comparison-brief",
        "Starting at just 600 dollars per month. 60 to 80 percent less than enterprise alternatives.",
    ),
    (
        "cta-endcard-brief",
        "Visit consenthub.io to schedule your demo.",
    ),
];

/// Сценарии 30-секундных клипов
pub const CLIP_SCRIPTS: &[(&str, &str)] = &[
    (
        "clip1-intro",
        "ConsentHub.",
    ),
    (
        "clip1-problem",
        "Paper forms get lost. Manual Dynamics entry creates errors. No audit trail means failed HIPAA audits.",
    ),
    (
        "clip1-solution",
        "ConsentHub delivers digital signatures, real-time Dynamics sync, and immutable compliance records.",
    ),
    (
        "clip1-cta",
        "Visit consenthub.io to learn more.",
    ),
    (
        "clip2-intro",
        "ConsentHub.",
    ),
    (
        "clip2-sync",
        "Bi-directional Dynamics 365 sync. Consent records flow between systems in under 200 milliseconds.",
    ),
    (
        "clip2-dashboard",
        "Monitor everything from a unified dashboard. Metrics, charts, and activity in real time.",
    ),
    (
        "clip2-cta",
        "Visit consenthub.io to see it in action.",
    ),
    (
        "clip3-intro",
        "ConsentHub.",
    ),
    (
        "clip3-audit",
        "Immutable audit trails with SHA-256 verification. Every consent action logged and tamper-proof.",
    ),
    (
        "clip3-wizard",
        "Capture compliant consent in three simple steps. Template, signature, confirmed.",
    ),
    (
        "clip3-cta",
        "Visit consenthub.io to schedule a demo.",
    ),
    (
        "clip4-intro",
        "ConsentHub.",
    ),
    (
        "clip4-pricing",
        "Full enterprise compliance from just 600 dollars per month. 60 to 80 percent less than alternatives.",
    ),
    (
        "clip4-features",
        "Consent engine, Dynamics integration, HIPAA compliance, patient portal, dashboard, and API.",
    ),
    (
        "clip4-cta",
        "Visit consenthub.io to get started.",
    ),
];
/// Собирает полный каталог: полная версия, короткая версия, затем клипы.
pub fn consenthub_catalog() -> Result<ScriptCatalog> {
    let mut catalog = ScriptCatalog::new();
    let tables = [
        (ScriptGroup::Full, FULL_SCRIPTS),
        (ScriptGroup::Brief, BRIEF_SCRIPTS),
        (ScriptGroup::Clip, CLIP_SCRIPTS),
    ];
    for (group, table) in tables {
        for (key, text) in table {
            catalog.insert(key, group, text)?;
        }
    }
    Ok(catalog)
}
