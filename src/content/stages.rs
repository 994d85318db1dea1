use super::{FocusItem, Stage};

pub static STAGES: [Stage; 4] = [
    Stage {
        id: "foundation",
        name: "Foundation",
        low: 0,
        high: 20,
        description: "You're probably not ready for formal enterprise security review. Fine for SMB and mid-market deals where security is a checkbox, but enterprise deals with real security teams will stall or die in review.",
        typical_profile: "$3-10M ARR. No or early SOC 2. First enterprise deals landing. Security handled by the CTO or a recent first hire.",
        focus: &[
            FocusItem::Link {
                text: "Get a real pen test covering your product (not just infrastructure) — Dimension 2 is your fastest path to credibility",
                url: "https://adversis.io/blog/penetration-testing-for-growth-stage-saas-companies",
            },
            FocusItem::Link {
                text: "Implement SSO and tighten your authorization model — these are the architecture deal-killers buyers check first",
                url: "https://adversis.io/blog/product-security-for-saas",
            },
            FocusItem::Text("Build a basic questionnaire answer bank so your CTO isn't spending 20 hours per questionnaire"),
            FocusItem::Text("Get an attestation letter on a trust center page"),
        ],
        defer: &[
            "Sophisticated monitoring and detection — focus on good architecture first",
            "SIEM log streaming — basic exportable audit logs are enough",
            "Formal vulnerability management process — your pen test findings are your vulnerability backlog for now",
            "SCIM provisioning — SSO first, automated lifecycle later",
        ],
    },
    Stage {
        id: "early-enterprise",
        name: "Early Enterprise",
        low: 21,
        high: 35,
        description: "You pass lightweight security reviews and can close deals where the buyer's security team does a checklist evaluation. But sophisticated buyers find gaps. Your artifacts get you to the call; the call doesn't always go well.",
        typical_profile: "$10-25M ARR. SOC 2 in hand. Closing some enterprise deals. Starting to see buyers who ask harder questions. Security lead (team of 1-2) drowning in questionnaires.",
        focus: &[
            FocusItem::Link {
                text: "Invest in pen test quality — upgrade from scanner-level to manual testing with attack chains",
                url: "https://adversis.io/blog/penetration-testing-for-growth-stage-saas-companies",
            },
            FocusItem::Text("Shore up security operations — incident response testing and audit logging are now table stakes"),
            FocusItem::Text("Designate and prepare a security spokesperson for calls — this is where deals are won or lost"),
            FocusItem::Link {
                text: "Align your artifacts — make sure your questionnaire, pen test report, and call narrative don't contradict each other",
                url: "https://adversis.io/blog/enterprise-security-readiness-what-to-build-before-buyers-ask",
            },
        ],
        defer: &[
            "Comprehensive supply chain security — branch protection with SAST is enough",
            "Automated secrets rotation — proper secrets management with manual rotation is fine",
            "Board-level security narrative — a documented roadmap with clear priorities is sufficient",
            "SIEM integration and log streaming — exportable audit logs cover most buyer needs",
        ],
    },
    Stage {
        id: "growth-enterprise",
        name: "Growth Enterprise",
        low: 36,
        high: 52,
        description: "You compete credibly with most enterprise buyers. Your artifacts are solid, your architecture passes review, and your team can handle security calls. Some sophisticated CISOs still find gaps, but you have a coherent story.",
        typical_profile: "$25-75M ARR. Enterprise revenue is a real channel. Small security team (3-6). Security program has matured beyond compliance.",
        focus: &[
            FocusItem::Link {
                text: "Close gaps in operations maturity and call readiness — these now separate you from competitors",
                url: "https://adversis.io/blog/enterprise-security-readiness-what-to-build-before-buyers-ask",
            },
            FocusItem::Text("Invest in detection capabilities and monitoring — sophisticated buyers in regulated industries ask specifically"),
            FocusItem::Text("Exercise your incident response plan — tabletop exercises are the difference between a policy and a program"),
            FocusItem::Text("Build buyer-side awareness into your security team's DNA — understand the evaluation, don't just survive it"),
        ],
        defer: &[
            "Zero-trust architecture — you're not regulated enough yet for the ROI",
            "Real-time automated remediation — solid SLAs with tracked metrics are sufficient",
            "Your roadmap trajectory matters more than current perfection — buyers at this stage evaluate direction",
        ],
    },
    Stage {
        id: "enterprise-ready",
        name: "Enterprise-Ready",
        low: 53,
        high: 75,
        description: "Your security program is a competitive advantage, not just a box to check. You don't merely survive security review — buyers come out of the process more confident in choosing you.",
        typical_profile: "$75M+ ARR. Enterprise-dominant revenue. Established security team. Selling into regulated industries or large enterprises.",
        focus: &[
            FocusItem::Link {
                text: "Continuous improvement: keep expanding pen test scope as your product evolves",
                url: "https://adversis.io/blog/penetration-testing-for-growth-stage-saas-companies",
            },
            FocusItem::Text("Exercise IR plan with increasingly realistic scenarios"),
            FocusItem::Text("Ensure your security story evolves with your architecture — stale narratives undermine current investment"),
            FocusItem::Text("Push toward structural controls everywhere — security that works when humans make mistakes"),
            FocusItem::Link {
                text: "Mentor your broader team on buyer awareness — readiness shouldn't depend on one spokesperson",
                url: "https://adversis.io/services",
            },
        ],
        defer: &[],
    },
];
