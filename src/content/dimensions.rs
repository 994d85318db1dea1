use super::{AnswerOption, Dimension, DimensionId, Question};

pub static DIMENSIONS: [Dimension; 5] = [
    Dimension {
        id: DimensionId::Compliance,
        name: "Compliance Artifacts",
        intro: "What buyers see before they ever talk to you. These artifacts shape their first impression — and first impressions set the tone for every conversation that follows.",
        questions: [
            Question {
                id: "q1",
                title: "SOC 2 Report Scope and Currency",
                why_it_matters: "Buyers' security teams read the scope section first. A narrow scope or stale report doesn't just look incomplete — it signals you're either hiding something or don't understand what they're evaluating.",
                options: [
                    AnswerOption {
                        score: 0,
                        label: "No SOC 2 report",
                        description: "You rely on verbal assurances, a self-authored security overview, or a compliance platform dashboard screenshot.",
                    },
                    AnswerOption {
                        score: 1,
                        label: "Type I or limited Type II",
                        description: "SOC 2 Type I completed, or Type II with scope limited to a single trust service criterion (Security only). Report is older than 12 months.",
                    },
                    AnswerOption {
                        score: 2,
                        label: "Current Type II with good scope",
                        description: "SOC 2 Type II current (within 12 months). Covers Security plus at least one additional criterion. Scope includes your production environment.",
                    },
                    AnswerOption {
                        score: 3,
                        label: "Comprehensive current Type II",
                        description: "SOC 2 Type II current with scope that matches what buyers actually evaluate. Continuous monitoring in place. You can explain your scope decisions if asked.",
                    },
                ],
            },
            Question {
                id: "q2",
                title: "Penetration Test as a Compliance Artifact",
                why_it_matters: "Buyers increasingly ask for pen test reports alongside SOC 2 — and SOC 2 doesn't require penetration testing. A missing or weak pen test report tells sophisticated buyers your compliance program covers the minimum, not what matters.",
                options: [
                    AnswerOption {
                        score: 0,
                        label: "No pen test",
                        description: "No penetration test in the past 18 months, or the test is an internal vulnerability scan labeled as a pen test.",
                    },
                    AnswerOption {
                        score: 1,
                        label: "Scanner-based test",
                        description: "Vulnerability scanner output repackaged as a pen test report. Scope covers network perimeter or marketing site, not the core product.",
                    },
                    AnswerOption {
                        score: 2,
                        label: "Real pen test on core product",
                        description: "Real pen test by a qualified firm covering the core product API and authentication. Attestation letter available for sharing.",
                    },
                    AnswerOption {
                        score: 3,
                        label: "Comprehensive annual pen test",
                        description: "Annual pen test scoped to what buyers care about: product API, auth flows, multi-tenant boundaries, cloud config. Clean attestation letter on your trust center.",
                    },
                ],
            },
            Question {
                id: "q3",
                title: "Security Questionnaire Response Capability",
                why_it_matters: "The questionnaire is often your first security interaction with a buyer. A 200-question SIG that takes your CTO three weeks to complete doesn't get a second chance.",
                options: [
                    AnswerOption {
                        score: 0,
                        label: "No standardized answers",
                        description: "Each questionnaire answered from scratch by whoever is available. The CTO spends 15-20 hours per questionnaire.",
                    },
                    AnswerOption {
                        score: 1,
                        label: "Partial answer bank",
                        description: "Some answers exist in a shared document, but they are inconsistent or partially stale. Still takes a week or more.",
                    },
                    AnswerOption {
                        score: 2,
                        label: "Maintained answer bank",
                        description: "Answer bank covering common frameworks (SIG, CAIQ). Answers are accurate, current, and in buyer vocabulary. Turnaround under a week.",
                    },
                    AnswerOption {
                        score: 3,
                        label: "Comprehensive, evidence-linked answers",
                        description: "Answer bank covers 80%+ of incoming questions. New questionnaires completed in 2-3 business days. Answers verified against actual controls.",
                    },
                ],
            },
            Question {
                id: "q4",
                title: "Policy and Documentation Alignment",
                why_it_matters: "Buyers compare your security policies to your pen test report, your architecture answers, and your questionnaire responses. Inconsistencies get flagged — and once a buyer spots one contradiction, they go looking for more.",
                options: [
                    AnswerOption {
                        score: 0,
                        label: "Template policies",
                        description: "Policies are templates with your company name swapped in. Documented controls don't reflect actual practices.",
                    },
                    AnswerOption {
                        score: 1,
                        label: "Customized but aspirational",
                        description: "Core policies exist and were customized. But they describe aspirational state more than current reality.",
                    },
                    AnswerOption {
                        score: 2,
                        label: "Policies reflect reality",
                        description: "Policies reflect what you actually do. Your team can point to specific controls. Updated at least annually.",
                    },
                    AnswerOption {
                        score: 3,
                        label: "Consistent security story",
                        description: "Policies, architecture docs, pen test report, and questionnaire answers tell one consistent story. Controls are structural.",
                    },
                ],
            },
            Question {
                id: "q5",
                title: "Shareable Security Artifacts and Trust Center",
                why_it_matters: "Your buyer's security analyst needs something to bring back to their CISO. If you can't provide it in a format they can forward internally, they can't champion you.",
                options: [
                    AnswerOption {
                        score: 0,
                        label: "No shareable documentation",
                        description: "No shareable security documentation beyond your marketing security page.",
                    },
                    AnswerOption {
                        score: 1,
                        label: "Manual artifact sharing",
                        description: "SOC 2 report available under NDA through a manual process. No trust center. Buyers must ask for everything individually.",
                    },
                    AnswerOption {
                        score: 2,
                        label: "Basic trust center",
                        description: "Trust center with SOC 2 report access, pen test attestation letter, and security overview. Available with minimal friction.",
                    },
                    AnswerOption {
                        score: 3,
                        label: "Comprehensive self-serve trust center",
                        description: "Trust center with current SOC 2, pen test attestation, security whitepaper, and compliance mappings. Self-serve access.",
                    },
                ],
            },
        ],
    },
    Dimension {
        id: DimensionId::Pentest,
        name: "Pen Test Quality",
        intro: "The pen test report is the single document most likely to land on a buyer's security leader's desk. Open yours while you answer these — if what's described below doesn't match what you see, that's the gap.",
        questions: [
            Question {
                id: "q6",
                title: "What Did Your Pen Test Actually Cover?",
                why_it_matters: "A pen test that covers your marketing site or network perimeter but not your actual product is worse than no pen test — it signals you don't understand what enterprise buyers are evaluating.",
                options: [
                    AnswerOption {
                        score: 0,
                        label: "No pen test",
                        description: "No pen test, or the last test was more than 18 months ago.",
                    },
                    AnswerOption {
                        score: 1,
                        label: "Infrastructure or perimeter only",
                        description: "Report covers network infrastructure or your external perimeter. Your core product — the APIs, login flows, and features customers use — wasn't tested. Look for: does the scope section mention your product by name?",
                    },
                    AnswerOption {
                        score: 2,
                        label: "Core product tested",
                        description: "Report covers your product: API endpoints, authentication, key business workflows, and cloud configuration. Look for: specific product features and API routes referenced in the findings.",
                    },
                    AnswerOption {
                        score: 3,
                        label: "Comprehensive, buyer-aligned scope",
                        description: "Scope matches what enterprise buyers expect: product API, login and access controls, customer data separation, cloud configuration, and deployment pipeline. Look for: a scope section that reads like your product's architecture, not a generic network diagram.",
                    },
                ],
            },
            Question {
                id: "q7",
                title: "How Was Your Product Actually Tested?",
                why_it_matters: "Enterprise security teams spot the difference between automated scanner output and real human testing in under a minute. A report that reads like a tool dump undermines every other security claim you make.",
                options: [
                    AnswerOption {
                        score: 0,
                        label: "No testing or automated scans only",
                        description: "No testing, or a scanning tool ran against your environment and produced a list of findings. Look for: if every finding has a CVE number and no narrative, it's automated.",
                    },
                    AnswerOption {
                        score: 1,
                        label: "Compliance-platform or scanner only",
                        description: "Automated scan from your compliance platform (Drata, Vanta) or a standalone scanner. Report is a list of vulnerabilities with severity ratings — no narrative explaining what they mean for your product. Look for: are there any findings that are specific to your business logic?",
                    },
                    AnswerOption {
                        score: 2,
                        label: "Scanning + manual analysis",
                        description: "Testing firm combined scanning with manual analysis. Report includes findings specific to your product's logic — things a scanner couldn't have found on its own. Look for: findings that reference your specific features, roles, or workflows.",
                    },
                    AnswerOption {
                        score: 3,
                        label: "Expert manual testing",
                        description: "Report clearly shows human expertise — testers chained findings together, wrote custom test cases for your product, and found flaws in business logic. Look for: attack narratives that tell a story, not just a list of individual issues.",
                    },
                ],
            },
            Question {
                id: "q8",
                title: "Was Customer Data Separation Tested?",
                why_it_matters: "If your product serves multiple customers from shared infrastructure, enterprise buyers will ask whether one customer can access another's data. This is the question that separates mid-market deals from enterprise ones.",
                options: [
                    AnswerOption {
                        score: 0,
                        label: "Never tested",
                        description: "No external party has tested whether one customer can access another customer's data in your product.",
                    },
                    AnswerOption {
                        score: 1,
                        label: "Basic cross-account testing",
                        description: "Testers tried some cross-account access at the API level, but didn't systematically test every place customer data could leak. Look for: a few findings mentioning \"authorization\" but no dedicated section on data separation.",
                    },
                    AnswerOption {
                        score: 2,
                        label: "Systematic across app and database",
                        description: "Report shows dedicated testing of customer data boundaries at both the application and database level. Look for: test cases showing \"logged in as Customer A, attempted to access Customer B's data\" with specific results.",
                    },
                    AnswerOption {
                        score: 3,
                        label: "Comprehensive across all shared layers",
                        description: "Testing covered every place customers share infrastructure: the application, database, file storage, caching, and background job systems. Look for: a dedicated section on isolation testing with coverage across your full architecture.",
                    },
                ],
            },
            Question {
                id: "q9",
                title: "What Happened After the Findings?",
                why_it_matters: "A pen test with dozens of unresolved findings tells buyers you test for show, not for security. What matters is evidence that you fixed the root causes — not just patched the symptoms.",
                options: [
                    AnswerOption {
                        score: 0,
                        label: "No formal follow-up",
                        description: "Findings weren't formally tracked. Some may have been fixed, but there's no record or process.",
                    },
                    AnswerOption {
                        score: 1,
                        label: "Findings tracked, fixes not verified",
                        description: "Findings are in a ticketing system and critical ones were addressed, but no one went back to verify the fixes actually worked.",
                    },
                    AnswerOption {
                        score: 2,
                        label: "Prioritized fixes with some retesting",
                        description: "Findings were prioritized by real risk (not just severity labels). Fixes addressed root causes, not just symptoms. Some fixes were verified through retesting.",
                    },
                    AnswerOption {
                        score: 3,
                        label: "All critical fixes verified by retesting",
                        description: "All critical and high findings fixed at the root cause. The testing firm retested and confirmed fixes work. You have a clean retest report ready to share.",
                    },
                ],
            },
            Question {
                id: "q10",
                title: "Could You Hand This Report to a Buyer?",
                why_it_matters: "Your pen test report will end up in front of your buyer's security leader. It either builds confidence or raises questions that take weeks to answer.",
                options: [
                    AnswerOption {
                        score: 0,
                        label: "No shareable report",
                        description: "No report, or it's raw scanner output with a cover page. You wouldn't want a buyer to see it.",
                    },
                    AnswerOption {
                        score: 1,
                        label: "Technical findings only",
                        description: "A list of findings sorted by severity. No executive summary, no business context, no explanation of what was tested or why. A buyer's security team could read it, but their leadership couldn't.",
                    },
                    AnswerOption {
                        score: 2,
                        label: "Professional, buyer-ready report",
                        description: "Clear executive summary plus technical detail. Findings explain business impact, not just technical severity. You also have an attestation letter — a one-page summary confirming the test was done.",
                    },
                    AnswerOption {
                        score: 3,
                        label: "Two-audience deliverable",
                        description: "Executive summary written for business stakeholders, plus technical detail for security teams. Report demonstrates real testing through attack narratives. Attestation letter on your trust center.",
                    },
                ],
            },
        ],
    },
    Dimension {
        id: DimensionId::Architecture,
        name: "Architecture Maturity",
        intro: "This is what sophisticated buyers are really evaluating. Compliance artifacts get you to the conversation — architecture answers determine whether you pass.",
        questions: [
            Question {
                id: "q11",
                title: "Authentication Architecture",
                why_it_matters: "Authentication is the first technical system buyers evaluate. No SSO is a deal-killer at enterprise scale. \"We support SSO\" and \"SSO is a first-class feature\" are very different answers.",
                options: [
                    AnswerOption {
                        score: 0,
                        label: "Username/password only",
                        description: "No SSO. No MFA option. Token management is ad hoc.",
                    },
                    AnswerOption {
                        score: 1,
                        label: "Basic SSO support",
                        description: "SSO supported but requires custom integration or isn't on standard plans. MFA available but not enforceable.",
                    },
                    AnswerOption {
                        score: 2,
                        label: "SSO + enforceable MFA",
                        description: "SSO via SAML and OIDC as standard features. MFA enforceable at org level. Token lifecycle documented.",
                    },
                    AnswerOption {
                        score: 3,
                        label: "SSO + SCIM + full lifecycle",
                        description: "SSO as first-class feature with SCIM provisioning. MFA enforced. Tokens with defined TTL and immediate revocation.",
                    },
                ],
            },
            Question {
                id: "q12",
                title: "Authorization Enforcement Model",
                why_it_matters: "BOLA/IDOR is the #1 vulnerability class in multi-tenant SaaS. \"In each route handler\" is the answer that makes CISOs nervous.",
                options: [
                    AnswerOption {
                        score: 0,
                        label: "Scattered route-handler checks",
                        description: "Authorization checks scattered across individual route handlers. No consistent pattern.",
                    },
                    AnswerOption {
                        score: 1,
                        label: "Per-endpoint checks",
                        description: "Most endpoints have checks, but enforcement is at the route-handler level. Basic RBAC (admin/user).",
                    },
                    AnswerOption {
                        score: 2,
                        label: "Framework-level enforcement",
                        description: "Authorization enforced at middleware or framework level. New endpoints inherit security by default.",
                    },
                    AnswerOption {
                        score: 3,
                        label: "Structural defense-in-depth",
                        description: "Middleware/policy engine ensures no endpoint is accessible without explicit authorization. Database-layer constraints back app-layer.",
                    },
                ],
            },
            Question {
                id: "q13",
                title: "Multi-Tenant Data Isolation",
                why_it_matters: "A single cross-tenant data leak can end your enterprise business overnight. \"Our ORM adds a WHERE clause\" is not an isolation architecture.",
                options: [
                    AnswerOption {
                        score: 0,
                        label: "Application-layer filtering only",
                        description: "Shared tables with WHERE tenant_id = ?. No isolation at cache, storage, or queue layers.",
                    },
                    AnswerOption {
                        score: 1,
                        label: "Structural support at DB layer",
                        description: "Application-layer filtering with some structural support (ORM base queries). Other layers rely on key prefixing.",
                    },
                    AnswerOption {
                        score: 2,
                        label: "Multi-layer isolation",
                        description: "Database isolation beyond app filtering (row-level security, schema-per-tenant). Cache namespaced. IAM-level storage boundaries.",
                    },
                    AnswerOption {
                        score: 3,
                        label: "Validated multi-layer isolation",
                        description: "Isolation validated at every shared boundary. Adversarial testing covers all layers. Architecture documented and explainable.",
                    },
                ],
            },
            Question {
                id: "q14",
                title: "Secrets and Credential Management",
                why_it_matters: "\"How do you manage secrets?\" is a standard buyer question. \"Environment variables\" is the answer that makes experienced CISOs stop taking notes.",
                options: [
                    AnswerOption {
                        score: 0,
                        label: "Environment variables / .env files",
                        description: "Secrets in env vars or config. No secrets manager. No rotation. Some may exist in version control history.",
                    },
                    AnswerOption {
                        score: 1,
                        label: "Inconsistent secrets manager use",
                        description: "Secrets manager for production but inconsistent coverage. Some long-lived credentials remain. No rotation schedule.",
                    },
                    AnswerOption {
                        score: 2,
                        label: "Secrets manager with rotation",
                        description: "All production secrets in secrets manager with audit logging. Rotation schedule defined and followed.",
                    },
                    AnswerOption {
                        score: 3,
                        label: "Automated short-lived credentials",
                        description: "Secrets manager for all environments. Automated rotation. Short-lived credentials where possible. Human access requires JIT approval.",
                    },
                ],
            },
            Question {
                id: "q15",
                title: "CI/CD and Supply Chain Security",
                why_it_matters: "Supply chain attacks are the question du jour for enterprise security teams. If a compromised dependency can reach production unchecked, buyers will find that.",
                options: [
                    AnswerOption {
                        score: 0,
                        label: "No branch protection",
                        description: "Developers can push directly to main. No automated security checks. Dependencies pulled without version pinning.",
                    },
                    AnswerOption {
                        score: 1,
                        label: "Basic branch protection",
                        description: "Branch protection with PR required. Basic CI but no security tooling. Dependencies managed but no vulnerability scanning.",
                    },
                    AnswerOption {
                        score: 2,
                        label: "Security tooling in CI",
                        description: "Branch protection with reviews. SAST/DAST in CI. Dependency scanning with defined response process. Deployment gated on CI.",
                    },
                    AnswerOption {
                        score: 3,
                        label: "Comprehensive pipeline security",
                        description: "Enforced PR workflow. SAST, dependency scanning, secrets scanning in CI. Container scanning. SBOM generation available.",
                    },
                ],
            },
        ],
    },
    Dimension {
        id: DimensionId::Operations,
        name: "Security Operations",
        intro: "Compliance artifacts and architecture describe what you've built. Operations describe whether it works when something goes wrong — and buyers increasingly care about the difference.",
        questions: [
            Question {
                id: "q16",
                title: "Incident Response Readiness",
                why_it_matters: "\"Walk me through your incident response process\" is a standard buyer question. If the answer is \"we have a policy document,\" buyers know it's never been tested.",
                options: [
                    AnswerOption {
                        score: 0,
                        label: "No IR plan",
                        description: "No documented incident response plan. Response would be entirely ad hoc.",
                    },
                    AnswerOption {
                        score: 1,
                        label: "Documented but untested plan",
                        description: "IR plan exists as a policy document. Roles defined on paper. Never tested or exercised.",
                    },
                    AnswerOption {
                        score: 2,
                        label: "Tested through exercises",
                        description: "IR plan tested through at least one tabletop exercise in the past year. Communication channels verified.",
                    },
                    AnswerOption {
                        score: 3,
                        label: "Regularly exercised with realistic scenarios",
                        description: "Exercised regularly with realistic scenarios. Includes customer notification procedures and regulatory reporting.",
                    },
                ],
            },
            Question {
                id: "q17",
                title: "Security Monitoring and Detection",
                why_it_matters: "\"We check the logs when something goes wrong\" isn't a monitoring strategy — it tells the buyer no one would notice a breach until a customer reports it.",
                options: [
                    AnswerOption {
                        score: 0,
                        label: "No security monitoring",
                        description: "No security-specific monitoring. You would learn about a breach from a customer complaint.",
                    },
                    AnswerOption {
                        score: 1,
                        label: "Infrastructure monitoring only",
                        description: "Basic infrastructure monitoring (uptime, error rates) but no security-specific detection or alerting.",
                    },
                    AnswerOption {
                        score: 2,
                        label: "Security-specific monitoring",
                        description: "Monitoring covers auth anomalies, authorization failures, infrastructure changes. Alerts for critical events.",
                    },
                    AnswerOption {
                        score: 3,
                        label: "Integrated detection with response",
                        description: "Monitoring across application, infrastructure, and cloud. Detection rules tuned to your threat model. Alert triage with SLAs.",
                    },
                ],
            },
            Question {
                id: "q18",
                title: "Audit Logging and Customer Observability",
                why_it_matters: "Your buyer's security operations team needs visibility into what's happening in your product. If they can't see who did what, that's a deal-blocker for any company with a SOC.",
                options: [
                    AnswerOption {
                        score: 0,
                        label: "No user-facing audit logs",
                        description: "Application logging covers errors and debugging only. Customers have zero visibility.",
                    },
                    AnswerOption {
                        score: 1,
                        label: "Basic audit logging",
                        description: "Basic audit logs (login events, major actions) but not queryable or exportable by customers.",
                    },
                    AnswerOption {
                        score: 2,
                        label: "Comprehensive queryable logs",
                        description: "Comprehensive logging: user actions, permission changes, data access. Queryable and exportable by customers.",
                    },
                    AnswerOption {
                        score: 3,
                        label: "Full audit trail with SIEM integration",
                        description: "Full audit trail with UI and API access. Log streaming to buyer's SIEM. 1+ year retention.",
                    },
                ],
            },
            Question {
                id: "q19",
                title: "Vulnerability Management and Prioritization",
                why_it_matters: "Buyers want to see a process, not just tools. \"We run scanners\" is different from \"we have a prioritized remediation process informed by what's actually exploitable.\"",
                options: [
                    AnswerOption {
                        score: 0,
                        label: "No formal process",
                        description: "Vulnerabilities discovered reactively — pen tests, incidents, or customer reports. Tracked informally if at all.",
                    },
                    AnswerOption {
                        score: 1,
                        label: "Scanning with basic tracking",
                        description: "Vulnerability scanning in place. Findings tracked in tickets. No prioritization beyond CVSS scores.",
                    },
                    AnswerOption {
                        score: 2,
                        label: "Prioritized process with SLAs",
                        description: "Scanning covers infrastructure, dependencies, and application. Triage considers exploitability. Defined remediation SLAs.",
                    },
                    AnswerOption {
                        score: 3,
                        label: "Risk-based prioritization with metrics",
                        description: "Prioritized by real attack paths and business impact. SLAs consistently met. Metrics tracked and reportable.",
                    },
                ],
            },
            Question {
                id: "q20",
                title: "Security Program Direction and Roadmap",
                why_it_matters: "Sophisticated buyers evaluate your trajectory, not just your current state. \"We're doing everything\" is less convincing than \"here's what we prioritized and why.\"",
                options: [
                    AnswerOption {
                        score: 0,
                        label: "No security roadmap",
                        description: "Investment decisions are reactive — driven by the last audit finding or the latest buyer question.",
                    },
                    AnswerOption {
                        score: 1,
                        label: "Informal priorities",
                        description: "Informal priorities exist but no documented roadmap. Driven by compliance frameworks or complaints.",
                    },
                    AnswerOption {
                        score: 2,
                        label: "Documented prioritized roadmap",
                        description: "Documented roadmap with sequenced initiatives. Some items explicitly deprioritized with rationale.",
                    },
                    AnswerOption {
                        score: 3,
                        label: "Threat-model-driven roadmap",
                        description: "Roadmap grounded in threat model. Priorities sequenced by attacker reality and buyer expectations. Board-level narrative available.",
                    },
                ],
            },
        ],
    },
    Dimension {
        id: DimensionId::Livecall,
        name: "Live Call Readiness",
        intro: "Everything above can be polished on paper. This dimension measures what happens when your buyer's CISO gets on a Zoom call and starts asking questions your documents don't cover.",
        questions: [
            Question {
                id: "q21",
                title: "Architecture Narrative Capability",
                why_it_matters: "\"Walk me through your multi-tenant architecture\" separates companies that pass security review from those that don't. Describing implementation details loses the room; explaining security properties wins the deal.",
                options: [
                    AnswerOption {
                        score: 0,
                        label: "No one can explain it",
                        description: "No one can explain the security architecture to a non-engineering audience. Discussions default to implementation details.",
                    },
                    AnswerOption {
                        score: 1,
                        label: "Ad hoc engineering explanations",
                        description: "CTO or tech lead can describe the architecture, but explanations are ad hoc and engineering-focused.",
                    },
                    AnswerOption {
                        score: 2,
                        label: "Designated spokesperson, prepared",
                        description: "A designated person can walk through auth, authorization, data isolation using buyer vocabulary. Consistent across calls.",
                    },
                    AnswerOption {
                        score: 3,
                        label: "Fluent, executive-to-technical range",
                        description: "Security spokesperson fluently explains architecture decisions and trade-offs. Pivots between executive and technical levels.",
                    },
                ],
            },
            Question {
                id: "q22",
                title: "Gap Acknowledgment and Roadmap Communication",
                why_it_matters: "What kills deals isn't having gaps — it's the inability to acknowledge them honestly and show a plan. Defensiveness is a red flag buyers see constantly.",
                options: [
                    AnswerOption {
                        score: 0,
                        label: "Gaps denied or deflected",
                        description: "\"We're SOC 2 compliant\" is the response to every security question. No honest assessment of limitations.",
                    },
                    AnswerOption {
                        score: 1,
                        label: "Defensive acknowledgment",
                        description: "Team acknowledges gaps when pressed, but responses are vague: \"we're working on it\" with no specifics.",
                    },
                    AnswerOption {
                        score: 2,
                        label: "Proactive acknowledgment with roadmap",
                        description: "Team proactively acknowledges gaps, explains why they exist, and references specific roadmap items.",
                    },
                    AnswerOption {
                        score: 3,
                        label: "Gaps addressed before buyers raise them",
                        description: "Team addresses gaps before buyers raise them. Frames limitations with clear business rationale and timeline.",
                    },
                ],
            },
            Question {
                id: "q23",
                title: "Security Spokesperson Credibility",
                why_it_matters: "Enterprise CISOs evaluate vendors for a living. They spot the difference between someone who understands security and someone reading from a script within two minutes.",
                options: [
                    AnswerOption {
                        score: 0,
                        label: "No designated person",
                        description: "No one designated for security calls. CTO takes them with no preparation, or sales tries with marketing talking points.",
                    },
                    AnswerOption {
                        score: 1,
                        label: "Technical but not security-fluent",
                        description: "CTO or security lead speaks from engineering experience but can't translate to the buyer's evaluation framework.",
                    },
                    AnswerOption {
                        score: 2,
                        label: "Credible designated spokesperson",
                        description: "Designated security point person who speaks the buyer's language. Credible on core topics. Handles most scenarios.",
                    },
                    AnswerOption {
                        score: 3,
                        label: "Practitioner-level peer credibility",
                        description: "Spokesperson with practitioner credibility. Comfortable with unexpected questions. Buyer's CISO treats them as a peer.",
                    },
                ],
            },
            Question {
                id: "q24",
                title: "Artifact-to-Conversation Consistency",
                why_it_matters: "Buyers compare what you wrote in the questionnaire to what you say on the call to what's in your pen test report. Inconsistencies are the #1 red flag.",
                options: [
                    AnswerOption {
                        score: 0,
                        label: "No coordination between artifacts",
                        description: "Questionnaire answers, pen test report, and call explanations produced by different people with no coordination.",
                    },
                    AnswerOption {
                        score: 1,
                        label: "Same team, different emphasis",
                        description: "Same team handles questionnaires and calls, but responses aren't standardized. Different emphasis depending on context.",
                    },
                    AnswerOption {
                        score: 2,
                        label: "Reviewed and consistent",
                        description: "Questionnaire answers reviewed before calls. Key claims consistent across formats. Evidence can be discussed live.",
                    },
                    AnswerOption {
                        score: 3,
                        label: "Unified security narrative",
                        description: "All artifacts tell one coherent story. The person on the call knows exactly what's in every document.",
                    },
                ],
            },
            Question {
                id: "q25",
                title: "Buyer-Side Awareness",
                why_it_matters: "Understanding how your buyer's security team evaluates vendors — what they check first, what triggers deeper scrutiny — is the difference between surviving the review and controlling it.",
                options: [
                    AnswerOption {
                        score: 0,
                        label: "No understanding of buyer process",
                        description: "No understanding of what enterprise security teams evaluate or how their approval process works.",
                    },
                    AnswerOption {
                        score: 1,
                        label: "General awareness",
                        description: "General awareness that buyers examine SOC 2, pen tests, and architecture. No understanding of how they evaluate these.",
                    },
                    AnswerOption {
                        score: 2,
                        label: "Understands the evaluation pattern",
                        description: "Team understands what gets reviewed first, what signals competence, what triggers escalation to their CISO.",
                    },
                    AnswerOption {
                        score: 3,
                        label: "Internalized the buyer perspective",
                        description: "Team has internalized the buyer's perspective. Security materials designed for the buyer's workflow, not yours.",
                    },
                ],
            },
        ],
    },
];
