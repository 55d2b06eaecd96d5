//! Static contract and document templates.
//!
//! Lookups are by exact type string. Structured inputs (`parties`, `terms`,
//! `details`) are accepted by the request types but never interpolated.

use tracing::debug;

use crate::writing::estimate_tokens;
use crate::writing::models::{ContractRequest, ContractResponse, TemplateRequest, TemplateResponse};

const FREELANCE_CONTRACT: &str = "\
# Freelance Service Agreement

This agreement is made between [Client] and [Freelancer].

## Scope of Work
The Freelancer will deliver the services described in the attached statement of work.

## Compensation
The Client will pay [Amount] within 30 days of receiving each invoice.

## Intellectual Property
All deliverables become the property of the Client upon full payment.

## Independent Contractor
The Freelancer is an independent contractor and not an employee of the Client.

## Termination
Either party may end this agreement with 14 days of written notice.

## Signatures
Client: ____________________    Date: __________
Freelancer: ________________    Date: __________";

const EMPLOYMENT_CONTRACT: &str = "\
# Employment Agreement

This agreement is made between [Employer] and [Employee].

## Position and Duties
The Employee will serve as [Job Title] and perform the duties reasonably assigned.

## Compensation and Benefits
The Employee will receive an annual salary of [Salary] and standard company benefits.

## Working Hours
Standard working hours are [Hours] per week.

## Confidentiality
The Employee will not disclose confidential information during or after employment.

## Termination
Either party may terminate employment with [Notice Period] of written notice.

## Signatures
Employer: __________________    Date: __________
Employee: __________________    Date: __________";

const NDA_CONTRACT: &str = "\
# Non-Disclosure Agreement

This agreement is made between [Disclosing Party] and [Receiving Party].

## Definition of Confidential Information
Any non-public business, technical or financial information shared between the parties.

## Obligations
The Receiving Party will use confidential information only for the agreed purpose.

## Exclusions
Information that is public, already known or independently developed is excluded.

## Term
Obligations under this agreement last for [Duration] from the date of signing.

## Signatures
Disclosing Party: __________    Date: __________
Receiving Party: ___________    Date: __________";

const PARTNERSHIP_CONTRACT: &str = "\
# Partnership Agreement

This agreement is made between [Partner A] and [Partner B].

## Purpose
The partners agree to operate [Business Name] for the purpose of [Purpose].

## Contributions
Each partner will contribute the capital and resources listed in Schedule A.

## Profit and Loss Sharing
Profits and losses are shared in proportion to each partner's contribution.

## Decision Making
Major decisions require the written consent of all partners.

## Dissolution
The partnership may be dissolved by mutual written agreement.

## Signatures
Partner A: _________________    Date: __________
Partner B: _________________    Date: __________";

const SERVICE_CONTRACT: &str = "\
# Service Agreement

This agreement is made between [Service Provider] and [Customer].

## Services
The Service Provider will perform the services described in Schedule A.

## Service Levels
Services will be delivered with professional skill and within agreed timelines.

## Fees and Payment
The Customer will pay [Fee] according to the payment schedule in Schedule B.

## Liability
Neither party is liable for indirect or consequential losses.

## Term and Termination
This agreement runs for [Term] and may be terminated for material breach.

## Signatures
Service Provider: __________    Date: __________
Customer: __________________    Date: __________";

const BLOG_POST_TEMPLATE: &str = "\
# [Post Title]

*[One-sentence hook that tells the reader why this matters]*

## Introduction
Set the scene and state the problem.

## Main Points
1. **[Point One]**: supporting detail
2. **[Point Two]**: supporting detail
3. **[Point Three]**: supporting detail

## Conclusion
Summarize the takeaway and add a call to action.";

const COVER_LETTER_TEMPLATE: &str = "\
# Cover Letter

[Your Name]
[Email] | [Phone]

Dear [Hiring Manager],

## Opening
State the role you are applying for and where you found it.

## Why You
Highlight two or three achievements that match the job description.

## Why Them
Explain what draws you to the company.

## Closing
Thank the reader and suggest a next step.

Sincerely,
[Your Name]";

const MEETING_NOTES_TEMPLATE: &str = "\
# Meeting Notes: [Topic]

**Date:** [Date]
**Attendees:** [Names]

## Agenda
- [Item]

## Discussion
- [Key point]

## Decisions
- [Decision]

## Action Items
- [ ] [Owner]: [Task] (due [Date])";

const PROJECT_PROPOSAL_TEMPLATE: &str = "\
# Project Proposal: [Project Name]

## Summary
One paragraph describing the project and its outcome.

## Problem
What is broken or missing today.

## Proposed Solution
How the project addresses the problem.

## Timeline
| Phase | Duration |
|---|---|
| [Phase] | [Weeks] |

## Budget
Estimated cost: [Amount]

## Success Metrics
- [Metric]";

const PRESS_RELEASE_TEMPLATE: &str = "\
# FOR IMMEDIATE RELEASE

## [Headline]

**[City], [Date]** - [Company] today announced [announcement].

## Details
Describe the news, who it affects and why it matters.

## Quote
\"[Quote]\" said [Name], [Title] at [Company].

## About [Company]
[Boilerplate company description]

**Media Contact:** [Name], [Email]";

fn contract_document(contract_type: &str) -> Option<&'static str> {
    match contract_type {
        "freelance" => Some(FREELANCE_CONTRACT),
        "employment" => Some(EMPLOYMENT_CONTRACT),
        "nda" => Some(NDA_CONTRACT),
        "partnership" => Some(PARTNERSHIP_CONTRACT),
        "service" => Some(SERVICE_CONTRACT),
        _ => None,
    }
}

fn template_document(template_type: &str) -> Option<&'static str> {
    match template_type {
        "blog_post" => Some(BLOG_POST_TEMPLATE),
        "cover_letter" => Some(COVER_LETTER_TEMPLATE),
        "meeting_notes" => Some(MEETING_NOTES_TEMPLATE),
        "project_proposal" => Some(PROJECT_PROPOSAL_TEMPLATE),
        "press_release" => Some(PRESS_RELEASE_TEMPLATE),
        _ => None,
    }
}

/// Second-level markdown headings, in document order.
fn section_titles(document: &str) -> Vec<String> {
    document
        .lines()
        .filter_map(|line| line.strip_prefix("## "))
        .map(|title| title.trim().to_string())
        .collect()
}

pub fn generate_contract(request: &ContractRequest) -> ContractResponse {
    if !request.parties.is_empty() || !request.terms.is_empty() {
        debug!(
            "Ignoring {} parties and {} terms for '{}' contract",
            request.parties.len(),
            request.terms.len(),
            request.contract_type
        );
    }

    let contract_content = match contract_document(&request.contract_type) {
        Some(document) => document.to_string(),
        None => format!(
            "Generated {} contract (no template available for this type)",
            request.contract_type
        ),
    };

    ContractResponse {
        sections: section_titles(&contract_content),
        tokens_used: estimate_tokens(&contract_content),
        contract_type: request.contract_type.clone(),
        contract_content,
    }
}

pub fn generate_template(request: &TemplateRequest) -> TemplateResponse {
    if !request.details.is_empty() {
        debug!(
            "Ignoring {} detail fields for '{}' template",
            request.details.len(),
            request.template_type
        );
    }

    let content = match template_document(&request.template_type) {
        Some(document) => document.to_string(),
        None => format!(
            "Template for {} is not available yet",
            request.template_type
        ),
    };

    TemplateResponse {
        tokens_used: estimate_tokens(&content),
        template_type: request.template_type.clone(),
        content,
    }
}
