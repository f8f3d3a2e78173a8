//! Document skeletons.
//!
//! Every [`DocumentKind`] has one skeleton. Rendering substitutes the system
//! name, the category label, the document date and the category's
//! [`TemplateRecord`] fields. The only impure input is the date, which
//! [`render`] reads from the local clock; [`render_on`] takes it explicitly.

use chrono::{Local, NaiveDate};

use pharmadoc_model::{DocumentKind, SystemCategory, TemplateRecord};

/// Format of the date suffix in document numbers.
pub const DOCUMENT_MONTH_FORMAT: &str = "%Y-%m";

/// Format of effective dates.
pub const EFFECTIVE_DATE_FORMAT: &str = "%Y-%m-%d";

const APPROVAL_BLOCK: &str = "\
Prepared By: ________________________    Date: _______________
Reviewed By: ________________________    Date: _______________
Approved By: ________________________    Date: _______________";

const SIGN_OFF: &str = "Approved By: ________________________    Date: _______________";

/// Render `kind` for `system_name` dated today.
pub fn render(kind: DocumentKind, system_name: &str, category: SystemCategory) -> String {
    render_on(kind, system_name, category, Local::now().date_naive())
}

/// Render `kind` for `system_name` as of `date`.
///
/// Output is fully determined by the arguments.
pub fn render_on(
    kind: DocumentKind,
    system_name: &str,
    category: SystemCategory,
    date: NaiveDate,
) -> String {
    let month = date.format(DOCUMENT_MONTH_FORMAT).to_string();
    let effective = date.format(EFFECTIVE_DATE_FORMAT).to_string();
    let fields = Fields {
        system_name,
        label: category.label(),
        record: pharmadoc_templates::lookup(category),
        number: format!("{}-{month}-001", kind.number_prefix()),
        month: &month,
        date: &effective,
    };
    match kind {
        DocumentKind::Vmp => vmp(&fields),
        DocumentKind::Urs => urs(&fields),
        DocumentKind::Frs => frs(&fields),
        DocumentKind::Dq => dq(&fields),
        DocumentKind::Iq => iq(&fields),
        DocumentKind::Oq => oq(&fields),
        DocumentKind::Pq => pq(&fields),
        DocumentKind::Vsr => vsr(&fields),
        DocumentKind::Deviation => deviation(&fields),
        DocumentKind::RiskAssessment => risk_assessment(&fields),
        DocumentKind::Capa => capa(&fields),
        DocumentKind::ChangeControl => change_control(&fields),
    }
}

struct Fields<'a> {
    system_name: &'a str,
    label: &'static str,
    record: &'static TemplateRecord,
    /// Full document number, e.g. `VMP-2024-03-001`.
    number: String,
    /// `YYYY-MM`, used to cross-reference sibling documents.
    month: &'a str,
    /// `YYYY-MM-DD`.
    date: &'a str,
}

fn vmp(f: &Fields<'_>) -> String {
    let Fields {
        system_name,
        label,
        number,
        date,
        ..
    } = f;
    let TemplateRecord {
        description,
        regulations,
        gamp_category,
        risk_method,
        interfaces,
        ..
    } = f.record;
    format!(
        "\
VALIDATION MASTER PLAN

For: {system_name} ({label})
Document Number: {number}
Version: 1.0
Effective Date: {date}

1. PURPOSE
This Validation Master Plan (VMP) establishes the framework for qualifying and validating the {system_name}
to ensure it meets intended use requirements and complies with {regulations}.

2. SYSTEM DESCRIPTION
{description}

3. VALIDATION APPROACH
3.1 Lifecycle Methodology: GAMP 5 Category {gamp_category}
3.2 Risk Assessment: {risk_method} methodology will be applied
3.3 Validation Stages:
- User Requirements Specification (URS)
- Functional Requirements Specification (FRS)
- Design Qualification (DQ)
- Installation Qualification (IQ)
- Operational Qualification (OQ)
- Performance Qualification (PQ)
3.4 Interfaces: {interfaces}

4. RESPONSIBILITIES
4.1 System Owner: [Name/Title]
4.2 Quality Assurance: QA Department
4.3 Validation Team: Validation Department
4.4 Technical Support: Engineering/IT Department

5. DOCUMENTATION
5.1 Required Documents:
- User Requirements Specification
- Functional Requirements Specification
- Design Documentation
- Test Protocols (IQ/OQ/PQ)
- Validation Summary Report
- Standard Operating Procedures

6. CHANGE CONTROL
All changes will be managed through the Change Control Procedure SOP-XXX.

7. TRAINING
All personnel must complete training on relevant SOPs prior to validation activities.

8. APPROVAL
{APPROVAL_BLOCK}
"
    )
}

fn urs(f: &Fields<'_>) -> String {
    let Fields {
        system_name,
        label,
        number,
        ..
    } = f;
    let TemplateRecord {
        description,
        regulations,
        val_approach,
        ..
    } = f.record;
    format!(
        "\
USER REQUIREMENTS SPECIFICATION

For: {system_name} ({label})
Document Number: {number}
Version: 1.0

1. INTRODUCTION
This document defines the user requirements for the {system_name} to be implemented at [Company Name].

2. SYSTEM DESCRIPTION
{description}

3. REGULATORY REQUIREMENTS
The system shall comply with:
- {regulations}
- Data integrity ALCOA+ principles
- Audit trail requirements for all GxP-relevant changes
- Electronic signature requirements where applicable

4. FUNCTIONAL REQUIREMENTS
4.1 General Requirements:
- System shall be available 99.5% of scheduled uptime
- Data backup shall occur daily with 30-day retention
- System shall maintain complete audit trails
- User access control with role-based permissions

4.2 Specific Requirements:
- [Add system-specific functional requirements here]
- [Example: Automated calculation verification for HPLC results]
- [Example: LIMS shall track sample chain of custody]

5. TECHNICAL REQUIREMENTS
5.1 Hardware:
- Server specifications (if applicable)
- Client workstation requirements
- Network requirements

5.2 Software:
- Operating system requirements
- Database requirements
- Interface requirements

6. VALIDATION REQUIREMENTS
The system shall be validated according to {val_approach}.

7. APPROVAL
{APPROVAL_BLOCK}
"
    )
}

fn frs(f: &Fields<'_>) -> String {
    let Fields {
        system_name,
        label,
        number,
        month,
        ..
    } = f;
    let TemplateRecord {
        description,
        regulations,
        gamp_category,
        interfaces,
        ..
    } = f.record;
    format!(
        "\
FUNCTIONAL REQUIREMENTS SPECIFICATION

For: {system_name} ({label})
Document Number: {number}
Version: 1.0

1. INTRODUCTION
This document describes how the {system_name} fulfils the requirements of URS-{month}-001.

2. SYSTEM OVERVIEW
{description}
GAMP 5 Category: {gamp_category}

3. FUNCTIONAL REQUIREMENTS
FR ID | Requirement | URS Reference | Priority
------|-------------|---------------|---------
FR-001 | [Functional requirement] | [URS reference] | [High/Medium/Low]

4. DATA INTEGRITY AND SECURITY
- Audit trail records user, date/time, old value and new value
- Role-based access control with unique user accounts
- Electronic records and signatures compliant with {regulations}

5. INTERFACES
{interfaces}

6. TRACEABILITY
Each functional requirement shall be traced to its URS item and to the OQ/PQ test cases that verify it.

7. APPROVAL
{APPROVAL_BLOCK}
"
    )
}

fn dq(f: &Fields<'_>) -> String {
    let Fields {
        system_name,
        label,
        number,
        month,
        ..
    } = f;
    let TemplateRecord {
        description,
        regulations,
        gamp_category,
        risk_method,
        ..
    } = f.record;
    format!(
        "\
DESIGN QUALIFICATION PROTOCOL

For: {system_name} ({label})
Document Number: {number}
Version: 1.0

1. OBJECTIVE
To verify that the proposed design of the {system_name} is suitable for its intended purpose
and satisfies URS-{month}-001 and FRS-{month}-001.

2. SYSTEM DESCRIPTION
{description}

3. DESIGN REVIEW
3.1 GAMP 5 Category: {gamp_category}
3.2 Regulatory Basis: {regulations}
3.3 Risk Controls: design mitigations identified by {risk_method}

4. ACCEPTANCE CRITERIA
- Every user requirement is addressed by the design
- Supplier assessment completed and approved
- Design documentation reviewed and approved

5. DEVIATIONS
Any discrepancy shall be recorded as a deviation and resolved before IQ execution.

6. APPROVAL
{APPROVAL_BLOCK}
"
    )
}

fn iq(f: &Fields<'_>) -> String {
    let Fields {
        system_name,
        label,
        number,
        ..
    } = f;
    let TemplateRecord {
        description,
        interfaces,
        ..
    } = f.record;
    format!(
        "\
INSTALLATION QUALIFICATION PROTOCOL

For: {system_name} ({label})
Document Number: {number}
Version: 1.0

1. OBJECTIVE
To verify that the {system_name} is installed according to approved specifications and manufacturer recommendations.

2. SYSTEM DESCRIPTION
{description}

3. INSTALLATION CHECKS
Test ID | Check | Expected Result | Actual Result | Pass/Fail
--------|-------|-----------------|---------------|----------
IQ-001 | Hardware components and serial numbers | As per specification | [Result] | [P/F]
IQ-002 | Software version and configuration | As per specification | [Result] | [P/F]
IQ-003 | Utilities and environmental conditions | Within range | [Result] | [P/F]
IQ-004 | Interfaces connected: {interfaces} | Connected | [Result] | [P/F]

4. DOCUMENTATION
- Manufacturer manuals and certificates
- Calibration certificates (if applicable)
- Configuration records

5. APPROVAL
{APPROVAL_BLOCK}
"
    )
}

fn oq(f: &Fields<'_>) -> String {
    let Fields {
        system_name,
        label,
        number,
        ..
    } = f;
    let TemplateRecord {
        regulations,
        risk_method,
        ..
    } = f.record;
    format!(
        "\
OPERATIONAL QUALIFICATION PROTOCOL

For: {system_name} ({label})
Document Number: {number}
Version: 1.0

1. OBJECTIVE
To verify that the {system_name} operates as intended throughout its specified operating ranges.

2. TEST SCOPE
Test depth is based on the {risk_method} risk assessment.

3. FUNCTIONAL TESTS
Test ID | Function | Expected Result | Actual Result | Pass/Fail
--------|----------|-----------------|---------------|----------
OQ-001 | User access control and roles | Access restricted by role | [Result] | [P/F]
OQ-002 | Audit trail | All GxP changes recorded | [Result] | [P/F]
OQ-003 | Alarms and error handling | Alarms raised as specified | [Result] | [P/F]
OQ-004 | Data backup and restore | Data restored without loss | [Result] | [P/F]

4. REGULATORY CHECKS
Electronic records and signatures shall be verified against {regulations}.

5. APPROVAL
{APPROVAL_BLOCK}
"
    )
}

fn pq(f: &Fields<'_>) -> String {
    let Fields {
        system_name,
        label,
        number,
        ..
    } = f;
    let TemplateRecord {
        description,
        val_approach,
        ..
    } = f.record;
    format!(
        "\
PERFORMANCE QUALIFICATION PROTOCOL

For: {system_name} ({label})
Document Number: {number}
Version: 1.0

1. OBJECTIVE
To demonstrate that the {system_name} performs consistently under routine operating conditions.

2. SYSTEM DESCRIPTION
{description}

3. TEST STRATEGY
{val_approach}

4. PERFORMANCE TESTS
Test ID | Scenario | Acceptance Criteria | Actual Result | Pass/Fail
--------|----------|---------------------|---------------|----------
PQ-001 | [Routine use scenario] | [Criteria] | [Result] | [P/F]
PQ-002 | [Worst-case scenario] | [Criteria] | [Result] | [P/F]

5. ACCEPTANCE
The system is accepted for GxP use when all tests pass or deviations are closed.

6. APPROVAL
{APPROVAL_BLOCK}
"
    )
}

fn vsr(f: &Fields<'_>) -> String {
    let Fields {
        system_name,
        label,
        number,
        month,
        date,
        ..
    } = f;
    let TemplateRecord {
        regulations,
        gamp_category,
        val_approach,
        ..
    } = f.record;
    format!(
        "\
VALIDATION SUMMARY REPORT

For: {system_name} ({label})
Document Number: {number}
Version: 1.0
Effective Date: {date}

1. PURPOSE
This report summarises the validation activities performed on the {system_name}
as defined in VMP-{month}-001.

2. VALIDATION APPROACH
GAMP 5 Category {gamp_category}: {val_approach}

3. SUMMARY OF RESULTS
Deliverable | Document Number | Status
------------|-----------------|-------
URS | URS-{month}-001 | [Approved]
FRS | FRS-{month}-001 | [Approved]
IQ | IQ-{month}-001 | [Executed]
OQ | OQ-{month}-001 | [Executed]
PQ | PQ-{month}-001 | [Executed]

4. DEVIATIONS
[List deviations raised during validation and their status]

5. CONCLUSION
The {system_name} is [fit/not fit] for its intended use and compliant with {regulations}.

6. APPROVAL
{APPROVAL_BLOCK}
"
    )
}

fn deviation(f: &Fields<'_>) -> String {
    let Fields {
        system_name,
        label,
        number,
        ..
    } = f;
    format!(
        "\
DEVIATION REPORT

Document Number: {number}
System: {system_name} ({label})

1. DEVIATION DESCRIPTION
[Describe the unexpected event or non-conformance]

2. IMPACT ASSESSMENT
[Describe potential impact on product quality, safety, or efficacy]

3. ROOT CAUSE ANALYSIS
[Investigation findings and identified root cause]

4. CORRECTIVE ACTIONS
[Immediate corrective actions taken]

5. PREVENTIVE ACTIONS
[Long-term preventive actions to avoid recurrence]

{SIGN_OFF}
"
    )
}

fn risk_assessment(f: &Fields<'_>) -> String {
    let Fields {
        system_name,
        label,
        number,
        ..
    } = f;
    let risk_method = f.record.risk_method;
    format!(
        "\
RISK ASSESSMENT REPORT

For: {system_name} ({label})
Document Number: {number}

1. METHODOLOGY
Risk Assessment Method: {risk_method}

2. RISK EVALUATION
Risk ID | Hazard | Severity | Likelihood | Detectability | RPN | Mitigation
-------|--------|----------|------------|--------------|-----|-----------
1 | [Risk] | [1-10] | [1-10] | [1-10] | [RPN] | [Actions]

3. CONCLUSION
Residual risk after mitigation is [Acceptable/Unacceptable]

{SIGN_OFF}
"
    )
}

fn capa(f: &Fields<'_>) -> String {
    let Fields {
        system_name,
        label,
        number,
        month,
        ..
    } = f;
    format!(
        "\
CORRECTIVE AND PREVENTIVE ACTION (CAPA) REPORT

Document Number: {number}
System: {system_name} ({label})
Related Deviation: DEV-{month}-001

1. PROBLEM STATEMENT
[Describe the issue requiring corrective or preventive action]

2. ROOT CAUSE
[Summarise the root cause from the investigation]

3. ACTION PLAN
Action ID | Action | Owner | Due Date | Status
----------|--------|-------|----------|-------
1 | [Action] | [Owner] | [Date] | [Open/Closed]

4. EFFECTIVENESS CHECK
[Describe how and when the effectiveness of the actions will be verified]

{SIGN_OFF}
"
    )
}

fn change_control(f: &Fields<'_>) -> String {
    let Fields {
        system_name,
        label,
        number,
        date,
        ..
    } = f;
    let TemplateRecord {
        gamp_category,
        interfaces,
        ..
    } = f.record;
    format!(
        "\
CHANGE CONTROL REQUEST

Document Number: {number}
System: {system_name} ({label})
Date Raised: {date}

1. DESCRIPTION OF CHANGE
[Describe the proposed change]

2. JUSTIFICATION
[Reason for the change]

3. IMPACT ASSESSMENT
- Validated state (GAMP 5 Category {gamp_category}): [Impact]
- Interfaces ({interfaces}): [Impact]
- Documentation and SOPs: [Impact]
- Training: [Impact]

4. REVALIDATION REQUIRED
[Yes/No - describe scope of testing]

5. IMPLEMENTATION PLAN
[Steps, owners and target dates]

{APPROVAL_BLOCK}
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn every_document_starts_with_heading() {
        for kind in DocumentKind::ALL {
            let text = render_on(kind, "HPLC-01", SystemCategory::Hplc, march_15());
            assert!(
                text.starts_with(kind.heading()),
                "{kind:?} should start with {}",
                kind.heading()
            );
        }
    }

    #[test]
    fn document_number_uses_prefix_and_month() {
        for kind in DocumentKind::ALL {
            let text = render_on(kind, "X", SystemCategory::Custom, march_15());
            let expected = format!("Document Number: {}-2024-03-001", kind.number_prefix());
            assert!(text.contains(&expected), "{kind:?} missing {expected}");
        }
    }

    #[test]
    fn deviation_ignores_template_fields() {
        let hplc = render_on(
            DocumentKind::Deviation,
            "Sys",
            SystemCategory::Hplc,
            march_15(),
        );
        assert!(!hplc.contains("FMEA"));
        assert!(hplc.contains("System: Sys (HPLC System)"));
    }
}
