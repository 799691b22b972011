//! Static catalog of model procedures and guided-learning hints.
//!
//! The catalog holds the three S.2 Integrated Science photosynthesis
//! investigations, each with its canonical procedure and an ordered hint
//! list. It is defined at compile time and never mutated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownExperiment;

/// The experiments known to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperimentId {
    Light,
    CarbonDioxide,
    Chlorophyll,
}

impl fmt::Display for ExperimentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperimentId::Light => write!(f, "light"),
            ExperimentId::CarbonDioxide => write!(f, "carbon-dioxide"),
            ExperimentId::Chlorophyll => write!(f, "chlorophyll"),
        }
    }
}

impl FromStr for ExperimentId {
    type Err = UnknownExperiment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ExperimentId::Light),
            "carbon-dioxide" | "co2" => Ok(ExperimentId::CarbonDioxide),
            "chlorophyll" => Ok(ExperimentId::Chlorophyll),
            other => Err(UnknownExperiment(other.to_string())),
        }
    }
}

/// A model procedure against which a student's submission is compared.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentDefinition {
    /// Stable identifier used on the command line.
    pub id: ExperimentId,
    /// Full investigation title shown to students.
    pub display_name: &'static str,
    /// The canonical procedure, one step per entry, in order.
    pub steps: &'static [&'static str],
    /// Guided-learning hints, in the order students should read them.
    pub hints: Option<&'static [&'static str]>,
}

impl ExperimentDefinition {
    /// Render the canonical procedure as the numbered text used in prompts.
    pub fn procedure_text(&self) -> String {
        self.steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {}", i + 1, step))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Look up an experiment definition by its id string.
///
/// Fails on unknown ids; never falls back to a default.
pub fn lookup(id: &str) -> Result<&'static ExperimentDefinition, UnknownExperiment> {
    let id: ExperimentId = id.parse()?;
    Ok(definition(id))
}

/// The definition for a known experiment id.
pub fn definition(id: ExperimentId) -> &'static ExperimentDefinition {
    match id {
        ExperimentId::Light => &CATALOG[0],
        ExperimentId::CarbonDioxide => &CATALOG[1],
        ExperimentId::Chlorophyll => &CATALOG[2],
    }
}

/// Every experiment definition, in display order.
pub fn all() -> &'static [ExperimentDefinition] {
    &CATALOG
}

static CATALOG: [ExperimentDefinition; 3] = [
    ExperimentDefinition {
        id: ExperimentId::Light,
        display_name: "Investigation: Light is necessary for photosynthesis",
        steps: &[
            "Destarch a potted plant by putting it in the dark for 1 or 2 days.",
            "Cut off a leaf and do an iodine test to ensure that the plant is destarched.",
            "Cover part of a leaf from the plant with aluminium foil.",
            "Put the potted plant under bright light for 4 hours.",
            "Cut off the leaf and remove the aluminium foil. Do an iodine test.",
            "Record the colour change of the leaf.",
        ],
        hints: Some(&[
            "**Step 1: Preparation** - Before you start, how can you be sure any starch you find was made *during* the experiment? What's the essential first step?",
            "**Step 2: Setting up the Test** - To make it a fair test, you need to compare a part of the plant that gets light with a part that doesn't. How could you achieve this on a single leaf?",
            "**Step 3: Running the Experiment** - Now that your test is set up, what condition does the plant need to photosynthesize? For how long should you provide this condition?",
            "**Step 4: Checking the Result** - What is the final chemical test you need to perform to see if starch was made?",
        ]),
    },
    ExperimentDefinition {
        id: ExperimentId::CarbonDioxide,
        display_name: "Investigation: Carbon dioxide is necessary for photosynthesis",
        steps: &[
            "Destarch a potted plant by putting it in the dark for 1 or 2 days.",
            "Cut off a leaf and do an iodine test to ensure that the plant is destarched.",
            "Choose two leaves of similar size on the plant. Put a transparent plastic bag around each of them. In one of the bags, put a few pieces of soda lime granules.",
            "Put the potted plant under bright light for 4 hours.",
            "Cut off the two leaves from the plant and do an iodine test.",
            "Record the colour change of the leaf.",
        ],
        hints: Some(&[
            "**Step 1: Preparation** - Just like the other experiments, what's the crucial first step to ensure your results are valid and not from pre-existing starch?",
            "**Step 2: Setting up the Test** - You need one leaf with carbon dioxide and one without. What chemical can absorb CO₂ from the air? How can you isolate the air around the leaves?",
            "**Step 3: Running the Experiment** - After setting up your two conditions, what does the plant need to start photosynthesizing? How long should you wait?",
            "**Step 4: Checking the Result** - How will you check both leaves for the presence of starch at the end?",
        ]),
    },
    ExperimentDefinition {
        id: ExperimentId::Chlorophyll,
        display_name: "Investigation: Chlorophyll is necessary for photosynthesis",
        steps: &[
            "Destarch a potted plant with variegated leaves by putting it in the dark for 1 or 2 days.",
            "Cut off a variegated leaf and do an iodine test to ensure that the plant is destarched.",
            "Put the potted plant under bright light for 4 hours.",
            "Cut off a variegated leaf from the plant and do an iodine test.",
            "Record the colour change of the leaf.",
        ],
        hints: Some(&[
            "**Step 1: Preparation** - What must you do to the plant before starting the experiment to ensure a fair test?",
            "**Step 2: Setting up the Test** - For this experiment, you need a leaf that already has a 'test' and a 'control' built-in. What special type of leaf has both green and non-green parts?",
            "**Step 3: Running the Experiment** - Once prepared, what single condition does this special plant need to begin photosynthesizing?",
            "**Step 4: Checking the Result** - What is the final procedure to check for starch in both the green and the non-green areas of the leaf?",
        ]),
    },
];
