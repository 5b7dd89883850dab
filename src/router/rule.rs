//! Static routing rules

use std::fmt;

use serde::Serialize;

/// One of the two destination directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    Dev,
    Test,
}

impl Destination {
    pub fn as_str(self) -> &'static str {
        match self {
            Destination::Dev => "dev",
            Destination::Test => "test",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How files of one extension are routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutingRule {
    /// Even creation hour goes to `even`, odd to `odd`
    ByHourParity { even: Destination, odd: Destination },
    /// Same destination whatever the creation time
    Always(Destination),
}

impl RoutingRule {
    pub fn destination(self, creation_hour: u32) -> Destination {
        match self {
            RoutingRule::ByHourParity { even, odd } => {
                if creation_hour % 2 == 0 {
                    even
                } else {
                    odd
                }
            }
            RoutingRule::Always(destination) => destination,
        }
    }
}

/// Extension to rule table. Extensions compare case-sensitively.
pub const ROUTING_RULES: &[(&str, RoutingRule)] = &[
    (
        "jar",
        RoutingRule::ByHourParity {
            even: Destination::Dev,
            odd: Destination::Test,
        },
    ),
    ("xml", RoutingRule::Always(Destination::Dev)),
];

/// Pick a destination for a file, or `None` when no rule matches.
///
/// `creation_hour` is the local-time hour (0-23) of the file's creation.
pub fn classify(extension: Option<&str>, creation_hour: u32) -> Option<Destination> {
    let extension = extension?;
    ROUTING_RULES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, rule)| rule.destination(creation_hour))
}
