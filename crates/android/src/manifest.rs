//! `AndroidManifest.xml` generation

use crate::permissions::Permission;
use crate::render::RenderContext;
use crate::template::LineTemplate;

/// Manifest layout: package, permission block, application and launcher activity
pub fn template<'a>() -> LineTemplate<RenderContext<'a>> {
    let mut template = LineTemplate::<RenderContext<'a>>::new()
        .fixed(r#"<manifest xmlns:android="http://schemas.android.com/apk/res/android""#)
        .line(|ctx: &RenderContext<'_>| {
            format!(r#"    package="{}">"#, ctx.xml(&ctx.record.package_name))
        })
        .blank();

    for permission in Permission::ALL {
        template = template.when(
            "    ",
            move |ctx: &RenderContext<'_>| ctx.record.grants(permission),
            permission.manifest_line(),
        );
    }

    template
        .blank()
        .fixed("    <application")
        .fixed(r#"        android:allowBackup="true""#)
        .fixed(r#"        android:icon="@mipmap/ic_launcher""#)
        .line(|ctx: &RenderContext<'_>| {
            format!(r#"        android:label="{}""#, ctx.xml(&ctx.record.app_name))
        })
        .fixed(r#"        android:roundIcon="@mipmap/ic_launcher_round""#)
        .fixed(r#"        android:supportsRtl="true""#)
        .fixed(r#"        android:theme="@style/AppTheme""#)
        .when_with_trailer(
            "        ",
            |ctx: &RenderContext<'_>| ctx.record.hardware_accel,
            r#"android:hardwareAccelerated="true""#,
            ">",
        )
        .fixed("        ")
        .fixed("        <activity")
        .fixed(r#"            android:name=".MainActivity""#)
        .line(|ctx: &RenderContext<'_>| {
            format!(
                r#"            android:screenOrientation="{}""#,
                ctx.xml(ctx.record.orientation_mode.as_str())
            )
        })
        .line(|ctx: &RenderContext<'_>| {
            format!(
                r#"            android:launchMode="{}">"#,
                ctx.xml(ctx.record.launch_mode.as_str())
            )
        })
        .fixed("            <intent-filter>")
        .fixed(r#"                <action android:name="android.intent.action.MAIN" />"#)
        .fixed(r#"                <category android:name="android.intent.category.LAUNCHER" />"#)
        .fixed("            </intent-filter>")
        .fixed("        </activity>")
        .fixed("    </application>")
        .fixed("</manifest>")
}

/// Render the manifest artifact
pub fn render(ctx: &RenderContext<'_>) -> String {
    template().render(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choices::{LaunchMode, Orientation};
    use crate::fields::Field;
    use crate::record::ConfigurationRecord;
    use crate::render::{render as render_all, ArtifactKind};

    fn manifest(record: &ConfigurationRecord) -> String {
        render_all(record).get(ArtifactKind::Manifest).to_string()
    }

    fn permission_lines(text: &str) -> Vec<&str> {
        text.lines()
            .map(str::trim)
            .filter(|l| l.starts_with("<uses-permission"))
            .collect()
    }

    #[test]
    fn test_default_manifest_exact() {
        let expected = r#"<manifest xmlns:android="http://schemas.android.com/apk/res/android"
    package="com.example.myapp">

    <uses-permission android:name="android.permission.INTERNET" />
    
    
    
    
    
    
    

    <application
        android:allowBackup="true"
        android:icon="@mipmap/ic_launcher"
        android:label="My Awesome App"
        android:roundIcon="@mipmap/ic_launcher_round"
        android:supportsRtl="true"
        android:theme="@style/AppTheme"
        android:hardwareAccelerated="true">
        
        <activity
            android:name=".MainActivity"
            android:screenOrientation="unspecified"
            android:launchMode="standard">
            <intent-filter>
                <action android:name="android.intent.action.MAIN" />
                <category android:name="android.intent.category.LAUNCHER" />
            </intent-filter>
        </activity>
    </application>
</manifest>"#;

        assert_eq!(manifest(&ConfigurationRecord::default()), expected);
    }

    #[test]
    fn test_defaults_request_only_internet() {
        let text = manifest(&ConfigurationRecord::default());
        assert_eq!(
            permission_lines(&text),
            [r#"<uses-permission android:name="android.permission.INTERNET" />"#]
        );
    }

    #[test]
    fn test_each_permission_flag_changes_exactly_one_line() {
        let mut base = ConfigurationRecord::default();
        base.internet_permission = false;
        let before = manifest(&base);

        for permission in Permission::ALL {
            let granted = base.clone().with(permission.field(), "true").unwrap();
            let after = manifest(&granted);

            let changed: Vec<_> = before
                .lines()
                .zip(after.lines())
                .filter(|(a, b)| a != b)
                .collect();
            assert_eq!(before.lines().count(), after.lines().count());
            assert_eq!(changed.len(), 1, "{permission:?}");
            assert_eq!(changed[0].0, "    ");
            assert_eq!(changed[0].1, format!("    {}", permission.manifest_line()));

            let revoked = granted.with(permission.field(), "false").unwrap();
            assert_eq!(manifest(&revoked), before);
        }
    }

    #[test]
    fn test_all_permissions_in_table_order() {
        let mut record = ConfigurationRecord::default();
        for permission in Permission::ALL {
            record.set(permission.field(), "true").unwrap();
        }

        let text = manifest(&record);
        let expected: Vec<String> = Permission::ALL.iter().map(|p| p.manifest_line()).collect();
        assert_eq!(permission_lines(&text), expected);
    }

    #[test]
    fn test_hardware_acceleration_attribute() {
        let attr = r#"android:hardwareAccelerated="true""#;

        let on = manifest(&ConfigurationRecord::default());
        assert!(on.contains(&format!("        {attr}>")));

        let off = manifest(&ConfigurationRecord::default().with(Field::HardwareAccel, "false").unwrap());
        assert!(!off.contains(attr));
        assert!(off.contains("\n        >\n"));
    }

    #[test]
    fn test_orientation_and_launch_mode_echo() {
        for (orientation, _) in Orientation::CHOICES {
            for (launch_mode, _) in LaunchMode::CHOICES {
                let record = ConfigurationRecord::default()
                    .with(Field::OrientationMode, orientation)
                    .unwrap()
                    .with(Field::LaunchMode, launch_mode)
                    .unwrap();

                let text = manifest(&record);
                assert!(text.contains(&format!(r#"android:screenOrientation="{orientation}""#)));
                assert!(text.contains(&format!(r#"android:launchMode="{launch_mode}">"#)));
            }
        }
    }

    #[test]
    fn test_unknown_choice_passes_through() {
        let record = ConfigurationRecord::default()
            .with(Field::OrientationMode, "reverseLandscape")
            .unwrap();
        assert!(manifest(&record).contains(r#"android:screenOrientation="reverseLandscape""#));
    }

    #[test]
    fn test_name_and_package_are_not_escaped() {
        let record = ConfigurationRecord::default()
            .with(Field::AppName, "<b>Fish & Chips</b>")
            .unwrap()
            .with(Field::PackageName, "not a package")
            .unwrap();

        let text = manifest(&record);
        assert!(text.contains(r#"android:label="<b>Fish & Chips</b>""#));
        assert!(text.contains(r#"package="not a package">"#));
    }

    #[test]
    fn test_template_shape() {
        let template = template();
        assert_eq!(template.conditional_count(), 9);
        assert_eq!(template.len(), manifest(&ConfigurationRecord::default()).lines().count());
    }
}
