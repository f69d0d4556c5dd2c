//! Built-in demo screens
//!
//! Each demo is a layout document bundled into the binary.

/// A bundled layout document
pub struct Demo {
    pub name: &'static str,
    pub source: &'static str,
}

impl Demo {
    /// The document's leading comment, if it has one
    pub fn summary(&self) -> &'static str {
        self.source
            .lines()
            .next()
            .and_then(|line| line.strip_prefix('#'))
            .map(str::trim)
            .unwrap_or("")
    }
}

macro_rules! demos {
    ($($name:literal),* $(,)?) => {
        &[$(Demo {
            name: $name,
            source: include_str!(concat!("../../../demos/", $name, ".toml")),
        }),*]
    };
}

pub const DEMOS: &[Demo] = demos![
    "vbox-basic",
    "vbox-margin",
    "vbox-default-margin",
    "vbox-flex",
    "vbox-align-start",
    "vbox-align-end",
    "vbox-align-center",
    "vbox-align-stretch",
    "vbox-align-each",
    "vbox-pack-start",
    "vbox-pack-center",
    "vbox-pack-end",
    "vbox-pack-fit",
    "hbox-basic",
    "hbox-margin",
    "hbox-flex",
    "hbox-align-start",
    "hbox-align-end",
    "hbox-align-center",
    "hbox-align-stretch",
    "hbox-align-each",
    "hbox-pack-start",
    "hbox-pack-center",
    "hbox-pack-end",
    "hbox-pack-fit",
    "relative-anchors",
    "relative-horizontal",
    "relative-vertical",
    "nest-profile",
    "nest-message-vbox",
    "nest-message-hbox",
];

pub fn find(name: &str) -> Option<&'static Demo> {
    DEMOS.iter().find(|demo| demo.name == name)
}
