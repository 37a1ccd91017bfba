//! Prompts for contract drafting

/// System prompt for contract drafting
pub const DRAFTING_SYSTEM_PROMPT: &str = r#"You are a legal assistant specializing in contract drafting.

You produce formal, comprehensive, legally-styled contracts. Stay
professional and neutral. Avoid disclaimers such as "I am an AI"."#;

/// Build the drafting prompt from the user's request
pub fn build_contract_prompt(request: &str) -> String {
    format!(
        r#"Generate a formal, comprehensive, and legally-styled contract based on the following user request.

The output should be only the contract text itself, without any introductory phrases like "Here is the contract you requested:". The contract should be well-formatted with clear sections (e.g., PARTIES, RECITALS, SCOPE OF SERVICES, PAYMENT TERMS, TERM AND TERMINATION, CONFIDENTIALITY, INTELLECTUAL PROPERTY, LIMITATION OF LIABILITY, GOVERNING LAW, ENTIRE AGREEMENT, SIGNATURES).

User Request: "{request}""#
    )
}
