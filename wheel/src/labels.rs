//! Wheel labels and the localized (Norwegian) texts shown around a spin.

use std::fmt;

use crate::WheelError;

#[cfg(test)]
#[path = "labels_test.rs"]
mod labels_test;

/// Shown on the result surface at startup when today's spin is used up.
pub const ALREADY_SPUN_TODAY: &str = "Du har allerede spunnet i dag. Kom tilbake i morgen!";

/// Notice for a trigger attempt after today's spin.
pub const ALREADY_SPUN_NOTICE: &str = "Du har allerede spunnet i dag!";

const RESULT_PREFIX: &str = "Din daglig styrke er: ";

const DEFAULT_STRENGTHS: [&str; 24] = [
    "Mot",
    "Tålmodighet",
    "Visdom",
    "Utholdenhet",
    "Kjærlighet",
    "Empati",
    "Ærlighet",
    "Integritet",
    "Selvrespekt",
    "Medfølelse",
    "Kreativitet",
    "Innovasjon",
    "Selvtillit",
    "Besluttsomhet",
    "Nysgjerrighet",
    "Respekt",
    "Balanse",
    "Fleksibilitet",
    "Optimisme",
    "Sterk vilje",
    "Entusiasme",
    "Indre ro",
    "Tillit",
    "Kraft",
];

/// One strength on the wheel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label(String);

impl Label {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, non-empty label sequence. Order is display order, clockwise from
/// the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels(Vec<Label>);

impl Labels {
    /// Build a label sequence, rejecting empty lists and blank names.
    ///
    /// # Errors
    ///
    /// [`WheelError::EmptyLabels`] for an empty list,
    /// [`WheelError::BlankLabel`] when a name is empty after trimming.
    pub fn new<I, S>(names: I) -> Result<Self, WheelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels = names
            .into_iter()
            .enumerate()
            .map(|(index, name)| {
                let name = name.into();
                if name.trim().is_empty() {
                    Err(WheelError::BlankLabel { index })
                } else {
                    Ok(Label(name))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        if labels.is_empty() {
            return Err(WheelError::EmptyLabels);
        }
        Ok(Self(labels))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a constructed sequence.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Label> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.0.iter()
    }
}

/// The 24 default strengths, in wheel order.
#[must_use]
pub fn default_labels() -> Labels {
    Labels(DEFAULT_STRENGTHS.iter().map(|name| Label((*name).to_owned())).collect())
}

/// Result-surface text for a revealed label.
#[must_use]
pub fn result_message(label: &Label) -> String {
    format!("{RESULT_PREFIX}{label}")
}
