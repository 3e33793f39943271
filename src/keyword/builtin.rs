//! Built-in insurance vocabulary and trigger table.

/// Insurance-context keywords, in corpus order.
pub const INSURANCE_KEYWORDS: &[&str] = &[
    "insurance",
    "insurer",
    "policy",
    "coverage",
    "risk",
    "claim",
    "premium",
    "underwriting",
    "liability",
    "protection",
    "indemnity",
    "compensation",
    "benefits",
    "casualty",
    "loss",
    "accident",
    "damage",
    "health",
    "life",
    "property",
    "auto",
    "vehicle",
    "medical",
    "dental",
    "vision",
    "disability",
    "worker",
    "business",
    "commercial",
    "professional",
    "cyber",
    "marine",
    "aviation",
    "flood",
    "earthquake",
    "catastrophe",
    "umbrella",
    "assurance",
    "reinsurance",
    "actuary",
    "broker",
    "agent",
    "pension",
    "annuity",
    "underwriter",
    "claims adjuster",
    "risk management",
    "actuarial",
    "policyholder",
    "insured",
];

/// Trigger phrases and the labels they imply, in lookup order.
pub const CATEGORY_MAPPINGS: &[(&str, &[&str])] = &[
    ("life", &["Life Insurance"]),
    ("health", &["Health Insurance"]),
    ("property", &["Property Insurance"]),
    ("casualty", &["Casualty Insurance"]),
    ("auto", &["Auto Insurance"]),
    ("vehicle", &["Auto Insurance"]),
    ("travel", &["Travel Insurance"]),
    ("pet", &["Pet Insurance"]),
    ("cyber", &["Cyber Insurance"]),
    ("professional", &["Professional Liability Insurance"]),
    ("worker", &["Workers Compensation Insurance"]),
    ("business interruption", &["Business Interruption Insurance"]),
    ("marine", &["Marine Insurance"]),
    ("aviation", &["Aviation Insurance"]),
    ("crop", &["Crop Insurance"]),
    ("flood", &["Flood Insurance"]),
    ("earthquake", &["Earthquake Insurance"]),
    ("disability", &["Disability Insurance"]),
    ("long-term care", &["Long-term Care Insurance"]),
    ("dental", &["Dental Insurance"]),
    ("vision", &["Vision Insurance"]),
    ("general liability", &["General Liability Insurance"]),
    ("product liability", &["Product Liability Insurance"]),
    ("directors and officers", &["Directors and Officers Insurance"]),
    ("errors and omissions", &["Errors and Omissions Insurance"]),
    ("employment practices", &["Employment Practices Liability Insurance"]),
    ("fidelity", &["Fidelity Insurance"]),
    ("crime", &["Crime Insurance"]),
    ("surety", &["Surety Insurance"]),
    ("bond", &["Surety Insurance"]),
    ("umbrella", &["Umbrella Insurance"]),
    ("excess", &["Excess Liability Insurance"]),
    ("reinsurance", &["Reinsurance"]),
    ("pension", &["Pension Insurance"]),
    ("annuity", &["Annuity Insurance"]),
];
