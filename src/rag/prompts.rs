//! Prompt builders for grounded, baseline and manual-authoring requests

/// Phrase the grounded prompt asks the model to emit when the context has no answer
pub const NOT_IN_MANUAL_SENTINEL: &str = "Procedure not found in standard operating manual.";

/// Build the grounded prompt from an assembled context window
pub fn build_grounded_prompt(question: &str, context: &str) -> String {
    format!(
        r#"You are a Level 3 Field Engineer.
Use ONLY the context below to answer.

Context:
{context}

Question: {question}

If the answer is not in the context, say "{NOT_IN_MANUAL_SENTINEL}""#
    )
}

/// Build the ungrounded comparison prompt. Takes the question only.
pub fn build_baseline_prompt(question: &str) -> String {
    format!(
        r"You are a helpful technical support assistant.
The user is asking a technical question about a telecom base station.
Question: {question}
Provide a technical resolution step-by-step."
    )
}

/// Build the prompt that authors the sample troubleshooting manual
pub fn build_manual_prompt(device: &str, operating_system: &str) -> String {
    format!(
        r"You are a Senior Technical Writer and Solutions Architect for a telecommunications company.
Your task is to create a realistic **Troubleshooting Manual** for a fictional device called the **'{device}'** running **'{operating_system}'**.

The output **must** be valid Markdown.

Structure the manual into exactly these 3 sections:
1. **Hardware Alarms**: Create 5 distinct error codes (e.g., 'E-101: Power Unit Failure').
2. **Software Alarms**: Create 5 distinct error codes (e.g., 'S-505: Handover Timeout').
3. **Connectivity Issues**: Create 5 distinct connectivity scenarios.

Use a single `#` heading for the title, `##` headings for the three sections and `###` headings for each error code or scenario.

For **EACH** error code or scenario, you must provide:
*   **Description**: A technical explanation of what went wrong.
*   **Resolution Procedure**: A numbered list of steps to resolve the issue. Be specific and technical (e.g., 'Check voltage at test point TP4', 'Run command `nebula-cli reset-interface`').

Do not include any conversational filler. Output ONLY the Markdown content starting with the title."
    )
}
