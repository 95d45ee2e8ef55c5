use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Traditional star spellings and the simplified catalog key they fold to.
const MARKER_ALIASES: &[(&str, &str)] = &[
    ("天機", "天机"),
    ("太陽", "太阳"),
    ("廉貞", "廉贞"),
    ("太陰", "太阴"),
    ("貪狼", "贪狼"),
    ("巨門", "巨门"),
    ("七殺", "七杀"),
    ("破軍", "破军"),
    ("左輔", "左辅"),
    ("天鉞", "天钺"),
    ("祿存", "禄存"),
    ("天馬", "天马"),
    ("陀羅", "陀罗"),
    ("鈴星", "铃星"),
    ("紅鸞", "红鸾"),
];

/// A named symbolic token ("star") sitting in a palace slot.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Marker {
    pub name: String,
}

impl Marker {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Name with traditional spellings folded to the simplified form used as
    /// the catalog key.
    #[must_use]
    pub fn canonical_name(&self) -> &str {
        let name = self.name.trim();
        MARKER_ALIASES
            .iter()
            .find(|(traditional, _)| *traditional == name)
            .map_or(name, |&(_, simplified)| simplified)
    }
}

/// All marker slots of one palace.
///
/// The natal slots (`main`, `minor`, `auxiliary`) drive scoring; the four annual
/// sub-slots are carried through for rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MarkerSet {
    #[serde(default)]
    pub main: Vec<Marker>,
    #[serde(default)]
    pub minor: Vec<Marker>,
    #[serde(default)]
    pub auxiliary: Vec<Marker>,
    #[serde(default)]
    pub changsheng12: Vec<Marker>,
    #[serde(default)]
    pub boshi12: Vec<Marker>,
    #[serde(default)]
    pub jiangqian12: Vec<Marker>,
    #[serde(default)]
    pub suiqian12: Vec<Marker>,
}

impl MarkerSet {
    /// Natal markers in slot order: main, then minor, then auxiliary.
    pub fn natal(&self) -> impl Iterator<Item = &Marker> {
        self.main
            .iter()
            .chain(self.minor.iter())
            .chain(self.auxiliary.iter())
    }

    /// Markers of the four annual sub-slots.
    pub fn annual(&self) -> impl Iterator<Item = &Marker> {
        self.changsheng12
            .iter()
            .chain(self.boshi12.iter())
            .chain(self.jiangqian12.iter())
            .chain(self.suiqian12.iter())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.natal().next().is_none() && self.annual().next().is_none()
    }
}
