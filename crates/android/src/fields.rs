//! Name-addressed field access
//!
//! Every record field has a [`Field`] with its external name, the tab it
//! belongs to, a display label and a [`FieldKind`]. Text-driven surfaces
//! (`--set`, the interactive session) go through [`ConfigurationRecord::get`]
//! and [`ConfigurationRecord::set`].

use crate::choices::{
    AppTheme, BuildType, LaunchMode, MinSdk, Orientation, SigningConfig, StatusBarStyle, TargetSdk,
};
use crate::record::ConfigurationRecord;
use apkforge_core::error::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

/// Form tab a field is presented on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Name, package, URL, version and developer
    #[default]
    Basic,
    /// SDK levels, activity and WebView behavior
    Advanced,
    /// Theme and colors
    Design,
    /// UI options, permissions and app features
    Features,
    /// Build type, signing and build flags
    Build,
}

impl Tab {
    /// All tabs in presentation order
    pub const ALL: [Tab; 5] = [Tab::Basic, Tab::Advanced, Tab::Design, Tab::Features, Tab::Build];

    /// Short identifier used on the command line
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Tab::Basic => "basic",
            Tab::Advanced => "advanced",
            Tab::Design => "design",
            Tab::Features => "features",
            Tab::Build => "build",
        }
    }

    /// Display label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tab::Basic => "Basic Info",
            Tab::Advanced => "Advanced",
            Tab::Design => "Design",
            Tab::Features => "Features",
            Tab::Build => "Build Config",
        }
    }

    /// Fields shown on this tab, in presentation order
    pub fn fields(self) -> impl Iterator<Item = Field> {
        Field::ALL.iter().copied().filter(move |f| f.tab() == self)
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::unknown_tab(s))
    }
}

/// Input widget a field maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// Positive integer
    Integer,
    /// Boolean switch
    Flag,
    /// Hex RGB color text
    Color,
    /// One of the listed `(value, label)` choices
    Choice(&'static [(&'static str, &'static str)]),
}

/// Current value of a field, as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Text field content
    Text(String),
    /// Integer field value
    Integer(u32),
    /// Switch state
    Flag(bool),
    /// Color text as entered
    Color(String),
    /// Choice value as written into generated files
    Choice(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) | FieldValue::Color(s) | FieldValue::Choice(s) => f.write_str(s),
            FieldValue::Integer(n) => write!(f, "{n}"),
            FieldValue::Flag(b) => write!(f, "{b}"),
        }
    }
}

macro_rules! field_kind {
    (text) => { FieldKind::Text };
    (color) => { FieldKind::Color };
    (flag) => { FieldKind::Flag };
    (count) => { FieldKind::Integer };
    ($choice:ident) => { FieldKind::Choice($choice::CHOICES) };
}

macro_rules! field_get {
    (text, $value:expr) => { FieldValue::Text($value.clone()) };
    (color, $value:expr) => { FieldValue::Color($value.clone()) };
    (flag, $value:expr) => { FieldValue::Flag($value) };
    (count, $value:expr) => { FieldValue::Integer($value.get()) };
    ($choice:ident, $value:expr) => { FieldValue::Choice($value.to_string()) };
}

macro_rules! field_parse {
    (text, $field:expr, $raw:expr) => { $raw.to_string() };
    (color, $field:expr, $raw:expr) => { $raw.to_string() };
    (flag, $field:expr, $raw:expr) => { parse_flag($field, $raw)? };
    (count, $field:expr, $raw:expr) => { parse_count($field, $raw)? };
    ($choice:ident, $field:expr, $raw:expr) => { $choice::from($raw) };
}

macro_rules! define_fields {
    (
        $(
            $variant:ident => $member:ident: $kind:ident, $name:literal, $tab:ident, $label:literal;
        )+
    ) => {
        /// A field of [`ConfigurationRecord`]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Field {
            $(
                #[doc = $label]
                $variant,
            )+
        }

        impl Field {
            /// All fields, grouped by tab in presentation order
            pub const ALL: &'static [Field] = &[$(Field::$variant,)+];

            /// External (camelCase) name
            #[must_use]
            pub fn name(self) -> &'static str {
                match self {
                    $(Field::$variant => $name,)+
                }
            }

            /// Tab the field is presented on
            #[must_use]
            pub fn tab(self) -> Tab {
                match self {
                    $(Field::$variant => Tab::$tab,)+
                }
            }

            /// Display label
            #[must_use]
            pub fn label(self) -> &'static str {
                match self {
                    $(Field::$variant => $label,)+
                }
            }

            /// Value domain of the field
            #[must_use]
            pub fn kind(self) -> FieldKind {
                match self {
                    $(Field::$variant => field_kind!($kind),)+
                }
            }
        }

        impl ConfigurationRecord {
            /// Read a field
            #[must_use]
            pub fn get(&self, field: Field) -> FieldValue {
                match field {
                    $(Field::$variant => field_get!($kind, self.$member),)+
                }
            }

            /// Update one field from text
            ///
            /// Text, color and choice fields accept any input; choice values
            /// outside the known set are kept verbatim. Flags accept
            /// `true/false`, `yes/no`, `on/off` or `1/0`. The version code must
            /// be a positive integer.
            pub fn set(&mut self, field: Field, raw: &str) -> Result<()> {
                match field {
                    $(Field::$variant => {
                        self.$member = field_parse!($kind, field, raw);
                    })+
                }
                tracing::debug!(field = field.name(), value = %self.get(field), "Field updated");
                Ok(())
            }
        }
    };
}

define_fields! {
    AppName => app_name: text, "appName", Basic, "Application Name";
    PackageName => package_name: text, "packageName", Basic, "Package Name";
    WebsiteUrl => website_url: text, "websiteUrl", Basic, "Website URL";
    AppDescription => app_description: text, "appDescription", Basic, "App Description";
    VersionName => version_name: text, "versionName", Basic, "Version Name";
    VersionCode => version_code: count, "versionCode", Basic, "Version Code";
    DeveloperName => developer_name: text, "developerName", Basic, "Developer Name";
    DeveloperEmail => developer_email: text, "developerEmail", Basic, "Developer Email";

    TargetSdk => target_sdk: TargetSdk, "targetSdk", Advanced, "Target SDK Version";
    MinSdk => min_sdk: MinSdk, "minSdk", Advanced, "Minimum SDK Version";
    OrientationMode => orientation_mode: Orientation, "orientationMode", Advanced, "Screen Orientation";
    LaunchMode => launch_mode: LaunchMode, "launchMode", Advanced, "Launch Mode";
    JsEnabled => js_enabled: flag, "jsEnabled", Advanced, "JavaScript Enabled";
    DomStorage => dom_storage: flag, "domStorage", Advanced, "DOM Storage";
    FileAccess => file_access: flag, "fileAccess", Advanced, "File Access";
    ZoomControls => zoom_controls: flag, "zoomControls", Advanced, "Zoom Controls";
    HardwareAccel => hardware_accel: flag, "hardwareAccel", Advanced, "Hardware Acceleration";
    MixedContent => mixed_content: flag, "mixedContent", Advanced, "Mixed Content";

    AppTheme => app_theme: AppTheme, "appTheme", Design, "App Theme";
    StatusBarColor => status_bar_color: StatusBarStyle, "statusBarColor", Design, "Status Bar Style";
    PrimaryColor => primary_color: color, "primaryColor", Design, "Primary Color";
    PrimaryDarkColor => primary_dark_color: color, "primaryDarkColor", Design, "Primary Dark";
    AccentColor => accent_color: color, "accentColor", Design, "Accent Color";
    BackgroundColor => background_color: color, "backgroundColor", Design, "Background";
    SplashScreen => splash_screen: flag, "splashScreen", Design, "Splash Screen";
    ProgressBar => progress_bar: flag, "progressBar", Design, "Loading Progress Bar";
    PullToRefresh => pull_to_refresh: flag, "pullToRefresh", Design, "Pull to Refresh";
    OfflineMode => offline_mode: flag, "offlineMode", Design, "Offline Mode Support";

    InternetPermission => internet_permission: flag, "internetPermission", Features, "Internet Access";
    NetworkStatePermission => network_state_permission: flag, "networkStatePermission", Features, "Network State";
    CameraPermission => camera_permission: flag, "cameraPermission", Features, "Camera Access";
    StoragePermission => storage_permission: flag, "storagePermission", Features, "Storage Access";
    LocationPermission => location_permission: flag, "locationPermission", Features, "Location Services";
    MicrophonePermission => microphone_permission: flag, "microphonePermission", Features, "Microphone";
    BluetoothPermission => bluetooth_permission: flag, "bluetoothPermission", Features, "Bluetooth";
    VibratePermission => vibrate_permission: flag, "vibratePermission", Features, "Vibration";
    PushNotifications => push_notifications: flag, "pushNotifications", Features, "Push Notifications";
    BiometricAuth => biometric_auth: flag, "biometricAuth", Features, "Biometric Authentication";
    DeepLinking => deep_linking: flag, "deepLinking", Features, "Deep Linking";
    FileSharing => file_sharing: flag, "fileSharing", Features, "File Sharing";
    Analytics => analytics: flag, "analytics", Features, "Analytics Integration";
    CrashReporting => crash_reporting: flag, "crashReporting", Features, "Crash Reporting";

    BuildType => build_type: BuildType, "buildType", Build, "Build Type";
    SigningConfig => signing_config: SigningConfig, "signingConfig", Build, "Signing Configuration";
    ProguardEnabled => proguard_enabled: flag, "proguardEnabled", Build, "Code Obfuscation (ProGuard)";
    MultiDexEnabled => multi_dex_enabled: flag, "multiDexEnabled", Build, "MultiDex Support";
    ShrinkResources => shrink_resources: flag, "shrinkResources", Build, "Shrink Resources";
    ViewBinding => view_binding: flag, "viewBinding", Build, "View Binding";
    DataBinding => data_binding: flag, "dataBinding", Build, "Data Binding";
}

impl Field {
    /// Whether the field holds a boolean
    #[must_use]
    pub fn is_flag(self) -> bool {
        self.kind() == FieldKind::Flag
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::unknown_field(wanted))
    }
}

impl ConfigurationRecord {
    /// Flip a boolean field, returning its new value
    pub fn toggle(&mut self, field: Field) -> Result<bool> {
        match self.get(field) {
            FieldValue::Flag(current) => {
                self.set(field, if current { "false" } else { "true" })?;
                Ok(!current)
            }
            _ => Err(Error::invalid_field_value(
                field.name(),
                "toggle",
                "a boolean field",
            )),
        }
    }
}

fn parse_flag(field: Field, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(Error::invalid_field_value(field.name(), raw, "true or false")),
    }
}

fn parse_count(field: Field, raw: &str) -> Result<NonZeroU32> {
    raw.trim()
        .parse::<NonZeroU32>()
        .map_err(|_| Error::invalid_field_value(field.name(), raw, "a positive integer"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use apkforge_core::error::ErrorCode;
    use proptest::prelude::*;

    #[test]
    fn test_every_field_has_unique_name() {
        let mut names: Vec<_> = Field::ALL.iter().map(|f| f.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Field::ALL.len());
    }

    #[test]
    fn test_names_match_serialized_record_keys() {
        let json = serde_json::to_value(ConfigurationRecord::default()).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), Field::ALL.len());
        for field in Field::ALL {
            assert!(object.contains_key(field.name()), "missing {}", field.name());
        }
    }

    #[test]
    fn test_tab_grouping() {
        assert_eq!(Tab::Basic.fields().count(), 8);
        assert_eq!(Tab::Advanced.fields().count(), 10);
        assert_eq!(Tab::Design.fields().count(), 10);
        assert_eq!(Tab::Features.fields().count(), 14);
        assert_eq!(Tab::Build.fields().count(), 7);
        assert_eq!(Tab::Basic.fields().next(), Some(Field::AppName));
    }

    #[test]
    fn test_parse_field_name() {
        assert_eq!("appName".parse::<Field>().unwrap(), Field::AppName);
        assert_eq!(" MINSDK ".parse::<Field>().unwrap(), Field::MinSdk);
        let err = "appNmae".parse::<Field>().unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownField);
    }

    #[test]
    fn test_parse_tab() {
        assert_eq!("Features".parse::<Tab>().unwrap(), Tab::Features);
        assert_eq!("design".parse::<Tab>().unwrap(), Tab::Design);
        assert!("colors".parse::<Tab>().is_err());
    }

    #[test]
    fn test_set_and_get_each_kind() {
        let mut record = ConfigurationRecord::default();

        record.set(Field::AppName, "Tide Tables").unwrap();
        record.set(Field::VersionCode, " 7 ").unwrap();
        record.set(Field::CameraPermission, "yes").unwrap();
        record.set(Field::OrientationMode, "landscape").unwrap();
        record.set(Field::AccentColor, "#123456").unwrap();

        assert_eq!(record.get(Field::AppName), FieldValue::Text("Tide Tables".into()));
        assert_eq!(record.get(Field::VersionCode), FieldValue::Integer(7));
        assert_eq!(record.get(Field::CameraPermission), FieldValue::Flag(true));
        assert_eq!(record.orientation_mode, Orientation::Landscape);
        assert_eq!(record.get(Field::AccentColor).to_string(), "#123456");
    }

    #[test]
    fn test_set_choice_outside_known_values() {
        let mut record = ConfigurationRecord::default();
        record.set(Field::LaunchMode, "singleInstancePerTask").unwrap();
        assert_eq!(record.get(Field::LaunchMode).to_string(), "singleInstancePerTask");
        assert!(!record.launch_mode.is_known());
    }

    #[test]
    fn test_set_rejects_bad_flag_and_count() {
        let mut record = ConfigurationRecord::default();
        let err = record.set(Field::HardwareAccel, "maybe").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFieldValue);

        assert!(record.set(Field::VersionCode, "0").is_err());
        assert!(record.set(Field::VersionCode, "-3").is_err());
        assert!(record.set(Field::VersionCode, "two").is_err());
        assert_eq!(record, ConfigurationRecord::default());
    }

    #[test]
    fn test_set_changes_only_the_target_field() {
        let mut record = ConfigurationRecord::default();
        record.set(Field::PackageName, "org.sample.app").unwrap();

        let before = ConfigurationRecord::default();
        for field in Field::ALL.iter().copied().filter(|f| *f != Field::PackageName) {
            assert_eq!(record.get(field), before.get(field), "{field} changed");
        }
    }

    #[test]
    fn test_toggle() {
        let mut record = ConfigurationRecord::default();
        assert!(record.toggle(Field::PullToRefresh).unwrap());
        assert!(record.pull_to_refresh);
        assert!(!record.toggle(Field::PullToRefresh).unwrap());
        assert!(record.toggle(Field::AppName).is_err());
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Field::AppName.kind(), FieldKind::Text);
        assert_eq!(Field::VersionCode.kind(), FieldKind::Integer);
        assert!(Field::ViewBinding.is_flag());
        assert_eq!(Field::PrimaryColor.kind(), FieldKind::Color);
        assert_eq!(Field::TargetSdk.kind(), FieldKind::Choice(TargetSdk::CHOICES));
    }

    proptest! {
        #[test]
        fn prop_setting_current_value_is_idempotent(index in 0..Field::ALL.len()) {
            let field = Field::ALL[index];
            let original = ConfigurationRecord::default();
            let mut record = original.clone();
            let current = record.get(field).to_string();

            record.set(field, &current).unwrap();
            prop_assert_eq!(record, original);
        }

        #[test]
        fn prop_text_fields_store_input_verbatim(value in ".*") {
            let mut record = ConfigurationRecord::default();
            record.set(Field::AppDescription, &value).unwrap();
            prop_assert_eq!(record.app_description, value);
        }
    }
}
