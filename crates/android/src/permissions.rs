//! Permission flags and their manifest declarations
//!
//! A static one-to-one table from record flag to Android permission name.

use crate::fields::Field;
use crate::record::ConfigurationRecord;

/// A device permission the app can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    /// `INTERNET`
    Internet,
    /// `ACCESS_NETWORK_STATE`
    NetworkState,
    /// `CAMERA`
    Camera,
    /// `WRITE_EXTERNAL_STORAGE`
    Storage,
    /// `ACCESS_FINE_LOCATION`
    Location,
    /// `RECORD_AUDIO`
    Microphone,
    /// `BLUETOOTH`
    Bluetooth,
    /// `VIBRATE`
    Vibrate,
}

impl Permission {
    /// All permissions in manifest order
    pub const ALL: [Permission; 8] = [
        Permission::Internet,
        Permission::NetworkState,
        Permission::Camera,
        Permission::Storage,
        Permission::Location,
        Permission::Microphone,
        Permission::Bluetooth,
        Permission::Vibrate,
    ];

    /// Fully qualified Android permission name
    #[must_use]
    pub fn android_name(self) -> &'static str {
        match self {
            Permission::Internet => "android.permission.INTERNET",
            Permission::NetworkState => "android.permission.ACCESS_NETWORK_STATE",
            Permission::Camera => "android.permission.CAMERA",
            Permission::Storage => "android.permission.WRITE_EXTERNAL_STORAGE",
            Permission::Location => "android.permission.ACCESS_FINE_LOCATION",
            Permission::Microphone => "android.permission.RECORD_AUDIO",
            Permission::Bluetooth => "android.permission.BLUETOOTH",
            Permission::Vibrate => "android.permission.VIBRATE",
        }
    }

    /// Record flag controlling this permission
    #[must_use]
    pub fn field(self) -> Field {
        match self {
            Permission::Internet => Field::InternetPermission,
            Permission::NetworkState => Field::NetworkStatePermission,
            Permission::Camera => Field::CameraPermission,
            Permission::Storage => Field::StoragePermission,
            Permission::Location => Field::LocationPermission,
            Permission::Microphone => Field::MicrophonePermission,
            Permission::Bluetooth => Field::BluetoothPermission,
            Permission::Vibrate => Field::VibratePermission,
        }
    }

    /// `<uses-permission>` element, without indentation
    #[must_use]
    pub fn manifest_line(self) -> String {
        format!(r#"<uses-permission android:name="{}" />"#, self.android_name())
    }
}

impl ConfigurationRecord {
    /// Whether the permission flag is set
    #[must_use]
    pub fn grants(&self, permission: Permission) -> bool {
        match permission {
            Permission::Internet => self.internet_permission,
            Permission::NetworkState => self.network_state_permission,
            Permission::Camera => self.camera_permission,
            Permission::Storage => self.storage_permission,
            Permission::Location => self.location_permission,
            Permission::Microphone => self.microphone_permission,
            Permission::Bluetooth => self.bluetooth_permission,
            Permission::Vibrate => self.vibrate_permission,
        }
    }

    /// Requested permissions in manifest order
    pub fn granted_permissions(&self) -> impl Iterator<Item = Permission> + '_ {
        Permission::ALL.into_iter().filter(|p| self.grants(*p))
    }
}
