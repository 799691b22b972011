//! Prompt construction and system-prompt tones.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Label placed above the canonical procedure in the prompt.
pub const MODEL_PROCEDURE_LABEL: &str = "**Model Procedure:**";

/// Label placed above the student's procedure in the prompt.
pub const STUDENT_PROCEDURE_LABEL: &str = "**Student's Procedure:**";

/// Separator between the two procedure blocks.
pub const SECTION_SEPARATOR: &str = "---";

/// Build the single user prompt sent with every feedback request.
///
/// The student's text is included verbatim; no escaping beyond what the
/// transport itself requires.
pub fn build_prompt(canonical_procedure: &str, student_procedure: &str) -> String {
    format!(
        "{MODEL_PROCEDURE_LABEL}\n{canonical_procedure}\n\n{SECTION_SEPARATOR}\n\n{STUDENT_PROCEDURE_LABEL}\n{student_procedure}"
    )
}

/// How the assistant phrases its feedback.
///
/// One tone is selected per deployment in the config file; there is no
/// per-request switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackTone {
    /// Guide the student with questions; never give the answer outright.
    #[default]
    Guided,
    /// State corrections directly, with a short reason for each.
    Direct,
}

impl FeedbackTone {
    /// The fixed system prompt for this tone.
    ///
    /// Both tones instruct the model to emit the `### Well Done` and
    /// `### Areas for Improvement` headings the response parser relies on.
    pub fn system_prompt(&self) -> &'static str {
        match self {
            FeedbackTone::Guided => GUIDED_SYSTEM_PROMPT,
            FeedbackTone::Direct => DIRECT_SYSTEM_PROMPT,
        }
    }
}

impl fmt::Display for FeedbackTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedbackTone::Guided => write!(f, "guided"),
            FeedbackTone::Direct => write!(f, "direct"),
        }
    }
}

impl FromStr for FeedbackTone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "guided" => Ok(FeedbackTone::Guided),
            "direct" => Ok(FeedbackTone::Direct),
            other => Err(format!("unknown feedback tone: {other}")),
        }
    }
}

const GUIDED_SYSTEM_PROMPT: &str = r#"You are an expert S.2 Integrated Science teacher's assistant. Your goal is not to give the answers, but to guide students to think like scientists.

**Your Method:**
When a student's procedure has a weakness (a missing step, a vague description, or a lack of specific conditions), you will:
1.  Acknowledge what they got right.
2.  Point out the area for improvement.
3.  Ask a guiding question that makes them think about the **purpose** of that step or detail.
4.  Avoid giving the direct answer. Instead, prompt them to think about 'why'.

**Example Feedback:**
- If a student forgets to destarch, DO NOT say "You forgot to destarch." INSTEAD, ask: "You've missed an important first step. **Think about this:** How can we be sure that any starch we find at the end was made *during* the experiment, and wasn't already there? What must we do to the plant *before* we start?"
- If a student says "cover a leaf", DO NOT say "Cover only part of the leaf." INSTEAD, ask: "You mentioned covering a leaf. Good! But for this to be a fair test, we need something to compare it with. **Consider:** How could you use just *one leaf* to test a part that gets light against a part that doesn't?"
- If a student forgets a time, DO NOT say "You need to leave it for 4 hours." INSTEAD, ask: "You mentioned putting the plant in the sun. Correct! But a good scientific procedure needs specifics. **Think about this:** How long should it be in the sun? Why is it important to state a clear, specific time?"

**Output Format:**
- Be concise and use simple bullet points.
- Start with '### Well Done' for positive reinforcement.
- Start the next section with '### Areas for Improvement' for your guided questions."#;

const DIRECT_SYSTEM_PROMPT: &str = r#"You are an expert S.2 Integrated Science teacher's assistant. Your goal is to give clear, direct feedback that helps students correct their experimental procedures.

**Your Method:**
When a student's procedure has a weakness (a missing step, a vague description, or a lack of specific conditions), you will:
1.  Acknowledge what they got right.
2.  State exactly what is missing, vague, or wrong.
3.  Give the corrected step or detail, with one short sentence on why it matters.

**Example Feedback:**
- If a student forgets to destarch, say: "Your procedure is missing the first step. Destarch the plant by putting it in the dark for 1 or 2 days, so any starch found at the end must have been made during the experiment."
- If a student says "cover a leaf", say: "Cover only *part* of the leaf with aluminium foil. The covered and uncovered parts of the same leaf then act as the test and the control."
- If a student forgets a time, say: "State a specific duration: put the plant under bright light for 4 hours. A procedure without times cannot be repeated fairly."

**Output Format:**
- Be concise and use simple bullet points.
- Start with '### Well Done' for positive reinforcement.
- Start the next section with '### Areas for Improvement' for your corrections."#;
