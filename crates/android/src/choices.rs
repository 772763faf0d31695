//! Single-choice field values
//!
//! Each choice type knows its allowed values and their display labels. Values
//! outside the known set are kept as [`Other`](Orientation::Other) and echoed
//! verbatim into generated files; nothing here rejects input.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => ($value:literal, $label:literal),
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[doc = $label]
                $variant,
            )+
            /// A value outside the known choices, carried verbatim
            Other(String),
        }

        impl $name {
            /// Known values with their display labels, in presentation order
            pub const CHOICES: &'static [(&'static str, &'static str)] = &[
                $(($value, $label),)+
            ];

            /// Value as written into generated files
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Other(value) => value.as_str(),
                }
            }

            /// Display label, if the value is a known choice
            #[must_use]
            pub fn label(&self) -> Option<&'static str> {
                match self {
                    $(Self::$variant => Some($label),)+
                    Self::Other(_) => None,
                }
            }

            /// Whether the value is one of the known choices
            #[must_use]
            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Other(_))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($value => Self::$variant,)+
                    other => Self::Other(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($value => Self::$variant,)+
                    _ => Self::Other(value),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserializer.deserialize_any(ChoiceVisitor).map(Self::from)
            }
        }
    };
}

/// Accepts strings and integers, so `minSdk = 26` and `minSdk = "26"` both work.
struct ChoiceVisitor;

impl Visitor<'_> for ChoiceVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or an integer")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
        Ok(value)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
        Ok(value.to_string())
    }
}

choice_enum! {
    /// API level the app is compiled against and targets
    TargetSdk {
        #[default]
        Api34 => ("34", "Android 14 (API 34)"),
        Api33 => ("33", "Android 13 (API 33)"),
        Api32 => ("32", "Android 12L (API 32)"),
        Api31 => ("31", "Android 12 (API 31)"),
        Api30 => ("30", "Android 11 (API 30)"),
    }
}

choice_enum! {
    /// Lowest API level the app installs on
    MinSdk {
        #[default]
        Api21 => ("21", "Android 5.0 (API 21)"),
        Api23 => ("23", "Android 6.0 (API 23)"),
        Api24 => ("24", "Android 7.0 (API 24)"),
        Api26 => ("26", "Android 8.0 (API 26)"),
        Api28 => ("28", "Android 9.0 (API 28)"),
    }
}

choice_enum! {
    /// `android:screenOrientation` of the main activity
    Orientation {
        #[default]
        Unspecified => ("unspecified", "Unspecified"),
        Portrait => ("portrait", "Portrait Only"),
        Landscape => ("landscape", "Landscape Only"),
        Sensor => ("sensor", "Sensor Based"),
    }
}

choice_enum! {
    /// `android:launchMode` of the main activity
    LaunchMode {
        #[default]
        Standard => ("standard", "Standard"),
        SingleTop => ("singleTop", "Single Top"),
        SingleTask => ("singleTask", "Single Task"),
        SingleInstance => ("singleInstance", "Single Instance"),
    }
}

choice_enum! {
    /// Application theme
    AppTheme {
        #[default]
        Material => ("material", "Material Design"),
        MaterialDark => ("materialDark", "Material Dark"),
        Custom => ("custom", "Custom Theme"),
        NoActionBar => ("noActionBar", "No Action Bar"),
    }
}

choice_enum! {
    /// Status bar style
    StatusBarStyle {
        #[default]
        SystemDefault => ("default", "Default"),
        Transparent => ("transparent", "Transparent"),
        Colored => ("colored", "Colored"),
        Hidden => ("hidden", "Hidden"),
    }
}

choice_enum! {
    /// Which build variants to produce
    BuildType {
        #[default]
        Debug => ("debug", "Debug"),
        Release => ("release", "Release"),
        Both => ("both", "Both"),
    }
}

choice_enum! {
    /// Signing key used for the build
    SigningConfig {
        #[default]
        Debug => ("debug", "Debug Key"),
        Release => ("release", "Release Key"),
        Custom => ("custom", "Custom Keystore"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values_round_trip_through_from() {
        for (value, label) in Orientation::CHOICES {
            let parsed = Orientation::from(*value);
            assert!(parsed.is_known());
            assert_eq!(parsed.as_str(), *value);
            assert_eq!(parsed.label(), Some(*label));
        }
    }

    #[test]
    fn test_unknown_value_is_carried_verbatim() {
        let mode = LaunchMode::from("singleInstancePerTask");
        assert_eq!(mode, LaunchMode::Other("singleInstancePerTask".to_string()));
        assert_eq!(mode.to_string(), "singleInstancePerTask");
        assert_eq!(mode.label(), None);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(TargetSdk::default().as_str(), "34");
        assert_eq!(MinSdk::default().as_str(), "21");
        assert_eq!(Orientation::default(), Orientation::Unspecified);
        assert_eq!(LaunchMode::default(), LaunchMode::Standard);
        assert_eq!(AppTheme::default(), AppTheme::Material);
        assert_eq!(StatusBarStyle::default(), StatusBarStyle::SystemDefault);
        assert_eq!(BuildType::default(), BuildType::Debug);
        assert_eq!(SigningConfig::default(), SigningConfig::Debug);
    }

    #[test]
    fn test_deserialize_accepts_integers_and_strings() {
        #[derive(Deserialize)]
        struct Levels {
            min: MinSdk,
            target: TargetSdk,
        }

        let levels: Levels = toml::from_str("min = 26\ntarget = \"33\"").unwrap();
        assert_eq!(levels.min, MinSdk::Api26);
        assert_eq!(levels.target, TargetSdk::Api33);
    }

    #[test]
    fn test_serialize_writes_plain_value() {
        let json = serde_json::to_string(&AppTheme::NoActionBar).unwrap();
        assert_eq!(json, "\"noActionBar\"");
    }
}
