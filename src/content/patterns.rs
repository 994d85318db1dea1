use crate::patterns::PatternRule;
use crate::scoring::DimensionScores;

// Thresholds are product-defined diagnostic cut-offs and must stay literal.

fn high_compliance_low_architecture(s: &DimensionScores) -> bool {
    s.compliance >= 10 && s.architecture <= 6
}

fn high_architecture_low_compliance(s: &DimensionScores) -> bool {
    s.architecture >= 10 && s.compliance <= 6
}

fn high_everything_low_livecall(s: &DimensionScores) -> bool {
    let avg = f64::from(s.compliance + s.pentest + s.architecture + s.operations) / 4.0;
    avg >= 9.0 && s.livecall <= 7
}

fn flat_low(s: &DimensionScores) -> bool {
    s.iter().all(|(_, v)| v <= 7) && s.sum() <= 25
}

fn strong_artifacts_weak_ops(s: &DimensionScores) -> bool {
    s.compliance + s.pentest >= 18 && s.operations <= 6
}

pub static PATTERNS: [PatternRule; 5] = [
    PatternRule {
        id: "high-compliance-low-architecture",
        name: "High Compliance, Low Architecture",
        detect: high_compliance_low_architecture,
        description: "You optimized for the audit, not for the buyer's technical evaluation. Common after a fast SOC 2 push. Sophisticated buyers will spot the gap between your compliance artifacts and your actual architecture.",
    },
    PatternRule {
        id: "high-architecture-low-compliance",
        name: "High Architecture, Low Compliance",
        detect: high_architecture_low_compliance,
        description: "Your engineering is solid but you can't prove it. Typical of technical founders who built well but never documented it. You're losing deals before you ever get to show what you've built.",
    },
    PatternRule {
        id: "high-everything-low-livecall",
        name: "High Everything, Low Live Call",
        detect: high_everything_low_livecall,
        description: "Your program is real but your team can't communicate it. Often solved by getting the right person on the call — or preparing the person you have.",
    },
    PatternRule {
        id: "flat-low",
        name: "Flat Low Scores Across Dimensions",
        detect: flat_low,
        description: "Start with Compliance Artifacts and Architecture — these are the foundation everything else builds on. Don't try to improve everything at once.",
    },
    PatternRule {
        id: "strong-artifacts-weak-ops",
        name: "Strong Artifacts, Weak Operations",
        detect: strong_artifacts_weak_ops,
        description: "Your artifacts look good on paper but your operations tell buyers the program is static — built for audit, not for real threats. Investing in monitoring and IR exercises will close this gap.",
    },
];
