//! `build.gradle (app)` generation

use crate::render::RenderContext;
use crate::template::LineTemplate;

/// Base dependencies every generated project gets
pub const BASE_DEPENDENCIES: [&str; 2] = [
    "androidx.appcompat:appcompat:1.6.1",
    "com.google.android.material:material:1.10.0",
];

/// Dependency added when pull-to-refresh is enabled
pub const SWIPE_REFRESH_DEPENDENCY: &str = "androidx.swiperefreshlayout:swiperefreshlayout:1.1.0";

/// Build script layout: plugins, android block, dependencies
pub fn template<'a>() -> LineTemplate<RenderContext<'a>> {
    let mut template = LineTemplate::<RenderContext<'a>>::new()
        .fixed("plugins {")
        .fixed("    id 'com.android.application'")
        .fixed("}")
        .blank()
        .fixed("android {")
        .line(|ctx: &RenderContext<'_>| format!("    compileSdk {}", ctx.record.target_sdk))
        .blank()
        .fixed("    defaultConfig {")
        .line(|ctx: &RenderContext<'_>| {
            format!(r#"        applicationId "{}""#, ctx.groovy(&ctx.record.package_name))
        })
        .line(|ctx: &RenderContext<'_>| format!("        minSdk {}", ctx.record.min_sdk))
        .line(|ctx: &RenderContext<'_>| format!("        targetSdk {}", ctx.record.target_sdk))
        .line(|ctx: &RenderContext<'_>| format!("        versionCode {}", ctx.record.version_code))
        .line(|ctx: &RenderContext<'_>| {
            format!(r#"        versionName "{}""#, ctx.groovy(&ctx.record.version_name))
        })
        .when(
            "        ",
            |ctx: &RenderContext<'_>| ctx.record.multi_dex_enabled,
            "multiDexEnabled true",
        )
        .fixed(r#"        testInstrumentationRunner "androidx.test.runner.AndroidJUnitRunner""#)
        .fixed("    }")
        .blank()
        .fixed("    buildTypes {")
        .fixed("        release {")
        .line(|ctx: &RenderContext<'_>| {
            format!("            minifyEnabled {}", ctx.record.proguard_enabled)
        })
        .line(|ctx: &RenderContext<'_>| {
            format!("            shrinkResources {}", ctx.record.shrink_resources)
        })
        .fixed("            proguardFiles getDefaultProguardFile('proguard-android-optimize.txt'), 'proguard-rules.pro'")
        .fixed("        }")
        .fixed("    }")
        .fixed("    compileOptions {")
        .fixed("        sourceCompatibility JavaVersion.VERSION_1_8")
        .fixed("        targetCompatibility JavaVersion.VERSION_1_8")
        .fixed("    }")
        .fixed("    buildFeatures {")
        .when(
            "        ",
            |ctx: &RenderContext<'_>| ctx.record.view_binding,
            "viewBinding true",
        )
        .when(
            "        ",
            |ctx: &RenderContext<'_>| ctx.record.data_binding,
            "dataBinding true",
        )
        .fixed("    }")
        .fixed("}")
        .blank()
        .fixed("dependencies {");

    for dependency in BASE_DEPENDENCIES {
        template = template.line(move |_: &RenderContext<'_>| {
            format!("    implementation '{dependency}'")
        });
    }

    template
        .when(
            "    ",
            |ctx: &RenderContext<'_>| ctx.record.pull_to_refresh,
            format!("implementation '{SWIPE_REFRESH_DEPENDENCY}'"),
        )
        .fixed("    // Add other dependencies based on selected features...")
        .fixed("}")
}

/// Render the build script artifact
pub fn render(ctx: &RenderContext<'_>) -> String {
    template().render(ctx)
}
