//! Narrative settings: universe, character and narrative style.
//!
//! Each selector is either one of the preset keys or `custom`, in which case the
//! matching free-text override supplies the description.

use derive_getters::Getters;
use questweaver_error::{ConfigurationError, ConfigurationErrorKind};
use serde::{Deserialize, Serialize};

/// Fictional setting applied to generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Universe {
    /// Shonen battle worlds
    #[default]
    BattleAnime,
    /// Neon-lit corporate dystopia
    Cyberpunk,
    /// Schools of magic
    MagicalAcademy,
    /// Eldritch reality
    CosmicHorror,
    /// User-described universe
    #[serde(rename = "custom")]
    Custom,
}

impl Universe {
    /// Canonical label; `None` for [`Universe::Custom`].
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::BattleAnime => Some("Battle Anime World"),
            Self::Cyberpunk => Some("Cyberpunk Future"),
            Self::MagicalAcademy => Some("Magical Academy"),
            Self::CosmicHorror => Some("Cosmic Horror"),
            Self::Custom => None,
        }
    }

    fn variants(&self) -> &'static [&'static str] {
        match self {
            Self::BattleAnime => &["Dragon Ball Z", "Naruto", "Jujutsu Kaisen", "Hero Academia"],
            Self::Cyberpunk => &["Neo Tokyo", "Corporate Dystopia", "Digital Wasteland"],
            Self::MagicalAcademy => &[
                "Ancient School",
                "Modern Magic University",
                "Secret Training Grounds",
            ],
            Self::CosmicHorror => &["Eldritch Reality", "Modern Occult", "Ancient Mysteries"],
            Self::Custom => &[],
        }
    }

    fn elements(&self) -> &'static [&'static str] {
        match self {
            Self::BattleAnime => &["power scaling", "training", "epic battles"],
            Self::Cyberpunk => &["high tech", "corporations", "street life"],
            Self::MagicalAcademy => &["spell learning", "magical research", "student life"],
            Self::CosmicHorror => &["forbidden knowledge", "cosmic entities", "sanity"],
            Self::Custom => &[],
        }
    }

    /// Full description used in prompts; `None` for [`Universe::Custom`].
    pub fn describe(&self) -> Option<String> {
        self.label().map(|label| {
            format!(
                "{} (in the vein of {}; featuring {})",
                label,
                self.variants().join(", "),
                self.elements().join(", ")
            )
        })
    }
}

/// Protagonist archetype applied to generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Character {
    /// Effortlessly strong mentor figure
    OverpoweredMentor,
    /// Plans ten moves ahead
    GeniusStrategist,
    /// Wins through grit
    #[default]
    DeterminedUnderdog,
    /// Unpredictable and morally grey
    ChaoticAntihero,
    /// User-described character
    #[serde(rename = "custom")]
    Custom,
}

impl Character {
    /// Canonical label; `None` for [`Character::Custom`].
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::OverpoweredMentor => Some("Overpowered Mentor"),
            Self::GeniusStrategist => Some("Genius Strategist"),
            Self::DeterminedUnderdog => Some("Determined Underdog"),
            Self::ChaoticAntihero => Some("Chaotic Antihero"),
            Self::Custom => None,
        }
    }

    fn examples(&self) -> &'static str {
        match self {
            Self::OverpoweredMentor => "Gojo Satoru, Kakashi",
            Self::GeniusStrategist => "Lelouch, L, Light",
            Self::DeterminedUnderdog => "Deku, Rock Lee",
            Self::ChaoticAntihero => "Gintoki, Vegeta",
            Self::Custom => "",
        }
    }

    fn traits(&self) -> &'static [&'static str] {
        match self {
            Self::OverpoweredMentor => &["overwhelming power", "laid-back", "teaching"],
            Self::GeniusStrategist => &["strategic", "calculating", "brilliant"],
            Self::DeterminedUnderdog => &["hardworking", "persistent", "growth"],
            Self::ChaoticAntihero => &["unpredictable", "complex morality", "powerful"],
            Self::Custom => &[],
        }
    }

    /// Full description used in prompts; `None` for [`Character::Custom`].
    pub fn describe(&self) -> Option<String> {
        self.label().map(|label| {
            format!(
                "{} (like {}; {})",
                label,
                self.examples(),
                self.traits().join(", ")
            )
        })
    }
}

/// Tone and voice applied to generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NarrativeStyle {
    /// Hype moments and big speeches
    #[default]
    EpicShonen,
    /// Banter with badass beats
    ComedyAction,
    /// Serious and strategic
    DarkTactical,
    /// Enigmatic and otherworldly
    MysteriousSupernatural,
    /// User-described style
    #[serde(rename = "custom")]
    Custom,
}

impl NarrativeStyle {
    /// Canonical label; `None` for [`NarrativeStyle::Custom`].
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::EpicShonen => Some("Epic Shonen Style"),
            Self::ComedyAction => Some("Comedy Action"),
            Self::DarkTactical => Some("Dark Tactical"),
            Self::MysteriousSupernatural => Some("Mysterious Supernatural"),
            Self::Custom => None,
        }
    }

    fn tone(&self) -> &'static str {
        match self {
            Self::EpicShonen => "Energetic and dramatic with hype moments",
            Self::ComedyAction => "Light-hearted with badass moments",
            Self::DarkTactical => "Serious and strategic",
            Self::MysteriousSupernatural => "Enigmatic and otherworldly",
            Self::Custom => "",
        }
    }

    fn elements(&self) -> &'static [&'static str] {
        match self {
            Self::EpicShonen => &["power-ups", "dramatic reveals", "epic speeches"],
            Self::ComedyAction => &["witty banter", "comedic timing", "cool scenes"],
            Self::DarkTactical => &[
                "detailed planning",
                "psychological elements",
                "clever solutions",
            ],
            Self::MysteriousSupernatural => &[
                "hidden meanings",
                "supernatural elements",
                "revelations",
            ],
            Self::Custom => &[],
        }
    }

    /// Full description used in prompts; `None` for [`NarrativeStyle::Custom`].
    pub fn describe(&self) -> Option<String> {
        self.label().map(|label| {
            format!(
                "{} ({}; {})",
                label,
                self.tone(),
                self.elements().join(", ")
            )
        })
    }

    /// Styles that call for a looser sampling temperature.
    pub fn is_mysterious(&self) -> bool {
        matches!(self, Self::MysteriousSupernatural)
    }
}

/// Narrative settings as chosen by the user.
///
/// # Examples
///
/// ```
/// use questweaver_core::{StorySettings, Universe};
///
/// let settings: StorySettings = serde_json::from_str(
///     r#"{"universe": "custom", "customUniverse": "A haunted lighthouse",
///         "character": "GENIUS_STRATEGIST", "narrativeStyle": "DARK_TACTICAL"}"#,
/// ).unwrap();
///
/// assert_eq!(*settings.universe(), Universe::Custom);
/// let resolved = settings.resolve().unwrap();
/// assert_eq!(resolved.universe(), "A haunted lighthouse");
/// assert!(resolved.character().starts_with("Genius Strategist"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct StorySettings {
    /// Universe selector
    universe: Universe,
    /// Description used when `universe` is custom
    #[serde(default, skip_serializing_if = "Option::is_none")]
    custom_universe: Option<String>,
    /// Character selector
    character: Character,
    /// Description used when `character` is custom
    #[serde(default, skip_serializing_if = "Option::is_none")]
    custom_character: Option<String>,
    /// Narrative style selector
    narrative_style: NarrativeStyle,
    /// Description used when `narrative_style` is custom
    #[serde(default, skip_serializing_if = "Option::is_none")]
    custom_narrative_style: Option<String>,
}

impl StorySettings {
    /// Creates settings from three preset selectors.
    pub fn new(universe: Universe, character: Character, narrative_style: NarrativeStyle) -> Self {
        Self {
            universe,
            character,
            narrative_style,
            ..Self::default()
        }
    }

    /// Switches the universe to custom with the given description.
    pub fn with_custom_universe(mut self, description: impl Into<String>) -> Self {
        self.universe = Universe::Custom;
        self.custom_universe = Some(description.into());
        self
    }

    /// Switches the character to custom with the given description.
    pub fn with_custom_character(mut self, description: impl Into<String>) -> Self {
        self.character = Character::Custom;
        self.custom_character = Some(description.into());
        self
    }

    /// Switches the narrative style to custom with the given description.
    pub fn with_custom_narrative_style(mut self, description: impl Into<String>) -> Self {
        self.narrative_style = NarrativeStyle::Custom;
        self.custom_narrative_style = Some(description.into());
        self
    }

    /// Whether every custom selector has a non-blank override.
    pub fn is_configured(&self) -> bool {
        self.resolve().is_ok()
    }

    /// Resolves selectors into prompt-ready descriptions.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationErrorKind::SettingsNotConfigured`] naming the first
    /// custom selector whose override is missing or blank.
    pub fn resolve(&self) -> Result<ResolvedSettings, ConfigurationError> {
        let universe = pick(
            "universe",
            self.universe.describe(),
            self.custom_universe.as_deref(),
        )?;
        let character = pick(
            "character",
            self.character.describe(),
            self.custom_character.as_deref(),
        )?;
        let narrative_style = pick(
            "narrativeStyle",
            self.narrative_style.describe(),
            self.custom_narrative_style.as_deref(),
        )?;

        Ok(ResolvedSettings {
            universe,
            character,
            narrative_style,
        })
    }
}

#[track_caller]
fn pick(
    field: &str,
    preset: Option<String>,
    custom: Option<&str>,
) -> Result<String, ConfigurationError> {
    match preset {
        Some(description) => Ok(description),
        None => custom
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                ConfigurationError::new(ConfigurationErrorKind::SettingsNotConfigured(
                    field.to_string(),
                ))
            }),
    }
}

/// Settings reduced to the three descriptions a prompt needs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct ResolvedSettings {
    /// Universe description
    universe: String,
    /// Character description
    character: String,
    /// Narrative style description
    narrative_style: String,
}

impl ResolvedSettings {
    /// Creates resolved settings directly from descriptions.
    pub fn new(
        universe: impl Into<String>,
        character: impl Into<String>,
        narrative_style: impl Into<String>,
    ) -> Self {
        Self {
            universe: universe.into(),
            character: character.into(),
            narrative_style: narrative_style.into(),
        }
    }
}
