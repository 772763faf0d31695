//! The configuration record
//!
//! One flat aggregate holding every user-editable application attribute.
//! Fields are public and independent: writing one never changes another.
//! Name-addressed access (`get`/`set` by [`Field`]) lives in [`crate::fields`].

use crate::choices::{
    AppTheme, BuildType, LaunchMode, MinSdk, Orientation, SigningConfig, StatusBarStyle, TargetSdk,
};
use crate::fields::Field;
use apkforge_core::error::{Error, ErrorCode, Result};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// All user-editable attributes of the generated application
///
/// Serialized field names are camelCase (`appName`, `minSdk`, ...), the same
/// names accepted by `--set`, the `[app]` config table and the session.
/// Only some fields reach the generated files; the others are edited and
/// stored but do not change the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
#[allow(clippy::struct_excessive_bools)]
pub struct ConfigurationRecord {
    // Basic info
    /// Application label
    pub app_name: String,
    /// Reverse-domain identifier; not validated
    pub package_name: String,
    /// Page the WebView loads
    pub website_url: String,
    /// Free-form description
    pub app_description: String,
    /// User-visible version string
    pub version_name: String,
    /// Monotonic build number
    pub version_code: NonZeroU32,
    /// Developer name
    pub developer_name: String,
    /// Developer contact email
    pub developer_email: String,

    // Advanced
    /// Compile and target API level
    pub target_sdk: TargetSdk,
    /// Lowest supported API level
    pub min_sdk: MinSdk,
    /// Activity screen orientation
    pub orientation_mode: Orientation,
    /// Activity launch mode
    pub launch_mode: LaunchMode,

    // WebView behavior
    /// Allow JavaScript in the WebView
    pub js_enabled: bool,
    /// Allow DOM storage in the WebView
    pub dom_storage: bool,
    /// Allow file access from the WebView
    pub file_access: bool,
    /// Show WebView zoom controls
    pub zoom_controls: bool,
    /// Hardware-accelerated rendering
    pub hardware_accel: bool,
    /// Allow HTTP content on HTTPS pages
    pub mixed_content: bool,

    // Design
    /// Application theme
    pub app_theme: AppTheme,
    /// Status bar style
    pub status_bar_color: StatusBarStyle,
    /// Primary theme color
    pub primary_color: String,
    /// Dark variant of the primary color
    pub primary_dark_color: String,
    /// Accent theme color
    pub accent_color: String,
    /// Window background color
    pub background_color: String,

    // UI options
    /// Show a splash screen
    pub splash_screen: bool,
    /// Show a page-load progress bar
    pub progress_bar: bool,
    /// Swipe-to-refresh; adds the swiperefreshlayout dependency
    pub pull_to_refresh: bool,
    /// Offline support
    pub offline_mode: bool,

    // Permissions
    /// Request `INTERNET`
    pub internet_permission: bool,
    /// Request `ACCESS_NETWORK_STATE`
    pub network_state_permission: bool,
    /// Request `CAMERA`
    pub camera_permission: bool,
    /// Request `WRITE_EXTERNAL_STORAGE`
    pub storage_permission: bool,
    /// Request `ACCESS_FINE_LOCATION`
    pub location_permission: bool,
    /// Request `RECORD_AUDIO`
    pub microphone_permission: bool,
    /// Request `BLUETOOTH`
    pub bluetooth_permission: bool,
    /// Request `VIBRATE`
    pub vibrate_permission: bool,

    // Advanced features
    /// Push notification support
    pub push_notifications: bool,
    /// Biometric authentication
    pub biometric_auth: bool,
    /// Deep link handling
    pub deep_linking: bool,
    /// File sharing
    pub file_sharing: bool,
    /// Usage analytics
    pub analytics: bool,
    /// Crash reporting
    pub crash_reporting: bool,

    // Build config
    /// Build variant
    pub build_type: BuildType,
    /// Signing configuration
    pub signing_config: SigningConfig,
    /// Minify the release build with ProGuard
    pub proguard_enabled: bool,
    /// Enable multidex
    pub multi_dex_enabled: bool,
    /// Strip unused resources from the release build
    pub shrink_resources: bool,
    /// Generate view binding classes
    pub view_binding: bool,
    /// Enable data binding
    pub data_binding: bool,
}

impl Default for ConfigurationRecord {
    fn default() -> Self {
        Self {
            app_name: "My Awesome App".to_string(),
            package_name: "com.example.myapp".to_string(),
            website_url: "https://example.com".to_string(),
            app_description: "Detailed description of your application...".to_string(),
            version_name: "1.0.0".to_string(),
            version_code: NonZeroU32::MIN,
            developer_name: "Your Name".to_string(),
            developer_email: "developer@example.com".to_string(),

            target_sdk: TargetSdk::default(),
            min_sdk: MinSdk::default(),
            orientation_mode: Orientation::default(),
            launch_mode: LaunchMode::default(),

            js_enabled: true,
            dom_storage: true,
            file_access: false,
            zoom_controls: false,
            hardware_accel: true,
            mixed_content: false,

            app_theme: AppTheme::default(),
            status_bar_color: StatusBarStyle::default(),
            primary_color: "#667eea".to_string(),
            primary_dark_color: "#5a67d8".to_string(),
            accent_color: "#f093fb".to_string(),
            background_color: "#ffffff".to_string(),

            splash_screen: true,
            progress_bar: true,
            pull_to_refresh: false,
            offline_mode: false,

            internet_permission: true,
            network_state_permission: false,
            camera_permission: false,
            storage_permission: false,
            location_permission: false,
            microphone_permission: false,
            bluetooth_permission: false,
            vibrate_permission: false,

            push_notifications: false,
            biometric_auth: false,
            deep_linking: false,
            file_sharing: false,
            analytics: false,
            crash_reporting: false,

            build_type: BuildType::default(),
            signing_config: SigningConfig::default(),
            proguard_enabled: false,
            multi_dex_enabled: false,
            shrink_resources: true,
            view_binding: true,
            data_binding: false,
        }
    }
}

impl ConfigurationRecord {
    /// Build a record from the `[app]` table of the tool config
    ///
    /// Keys left out keep their defaults. Unknown keys are rejected so that a
    /// typo does not silently fall back to a default.
    pub fn from_table(table: toml::Table) -> Result<Self> {
        if table.is_empty() {
            return Ok(Self::default());
        }

        toml::Value::Table(table).try_into().map_err(|e: toml::de::Error| {
            Error::new(
                ErrorCode::InvalidConfigValue,
                format!("Invalid [app] table: {}", e.message()),
            )
            .with_source(e)
            .with_suggestion("Run `apkforge defaults` to see the accepted keys")
        })
    }

    /// Return the record with one field updated from text
    pub fn with(mut self, field: Field, raw: &str) -> Result<Self> {
        self.set(field, raw)?;
        Ok(self)
    }

    /// Apply `field=value` assignments in order
    pub fn apply_assignments<'a>(
        &mut self,
        assignments: impl IntoIterator<Item = &'a str>,
    ) -> Result<()> {
        for assignment in assignments {
            let (name, value) = assignment.split_once('=').ok_or_else(|| {
                Error::invalid_input(format!("Expected field=value, got {assignment:?}"))
            })?;
            let field: Field = name.trim().parse()?;
            self.set(field, value)?;
        }
        Ok(())
    }

    /// Render the record as a TOML `[app]` table
    pub fn to_toml(&self) -> Result<String> {
        #[derive(Serialize)]
        struct Document<'a> {
            app: &'a ConfigurationRecord,
        }

        toml::to_string(&Document { app: self })
            .map_err(|e| Error::new(ErrorCode::Internal, format!("TOML encode error: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_form_defaults() {
        let record = ConfigurationRecord::default();
        assert_eq!(record.app_name, "My Awesome App");
        assert_eq!(record.package_name, "com.example.myapp");
        assert_eq!(record.version_code.get(), 1);
        assert_eq!(record.version_name, "1.0.0");
        assert!(record.internet_permission);
        assert!(!record.camera_permission);
        assert!(record.hardware_accel);
        assert!(record.shrink_resources);
        assert!(!record.proguard_enabled);
        assert!(!record.multi_dex_enabled);
        assert!(record.view_binding);
        assert!(!record.data_binding);
        assert!(!record.pull_to_refresh);
    }

    #[test]
    fn test_from_empty_table_is_default() {
        let record = ConfigurationRecord::from_table(toml::Table::new()).unwrap();
        assert_eq!(record, ConfigurationRecord::default());
    }

    #[test]
    fn test_from_table_overlays_defaults() {
        let table: toml::Table = toml::from_str(
            r#"
            appName = "Trail Log"
            versionCode = 42
            minSdk = 26
            orientationMode = "portrait"
            cameraPermission = true
            "#,
        )
        .unwrap();

        let record = ConfigurationRecord::from_table(table).unwrap();
        assert_eq!(record.app_name, "Trail Log");
        assert_eq!(record.version_code.get(), 42);
        assert_eq!(record.min_sdk, MinSdk::Api26);
        assert_eq!(record.orientation_mode, Orientation::Portrait);
        assert!(record.camera_permission);
        assert_eq!(record.package_name, "com.example.myapp");
    }

    #[test]
    fn test_from_table_rejects_unknown_keys() {
        let table: toml::Table = toml::from_str("appNmae = \"typo\"").unwrap();
        let err = ConfigurationRecord::from_table(table).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidConfigValue);
    }

    #[test]
    fn test_from_table_rejects_zero_version_code() {
        let table: toml::Table = toml::from_str("versionCode = 0").unwrap();
        assert!(ConfigurationRecord::from_table(table).is_err());
    }

    #[test]
    fn test_apply_assignments() {
        let mut record = ConfigurationRecord::default();
        record
            .apply_assignments(["appName=Field Notes", "launchMode=singleTask", "multiDexEnabled=true"])
            .unwrap();

        assert_eq!(record.app_name, "Field Notes");
        assert_eq!(record.launch_mode, LaunchMode::SingleTask);
        assert!(record.multi_dex_enabled);
    }

    #[test]
    fn test_apply_assignments_keeps_equals_in_value() {
        let mut record = ConfigurationRecord::default();
        record
            .apply_assignments(["websiteUrl=https://example.com/?a=b"])
            .unwrap();
        assert_eq!(record.website_url, "https://example.com/?a=b");
    }

    #[test]
    fn test_apply_assignments_requires_equals() {
        let mut record = ConfigurationRecord::default();
        let err = record.apply_assignments(["appName"]).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_toml_round_trip_through_table() {
        let record = ConfigurationRecord::default()
            .with(Field::AppName, "Round Trip")
            .unwrap();

        let document: toml::Table = toml::from_str(&record.to_toml().unwrap()).unwrap();
        let table = document["app"].as_table().unwrap().clone();
        assert_eq!(ConfigurationRecord::from_table(table).unwrap(), record);
    }
}
