//! Export configuration
//!
//! [`ExportConfiguration`] is built once per run and yields the immutable
//! [`ExportOptions`] applied to every exported element.

use crate::config::schema::ExportConfig;
use crate::document::node::ElementNode;
use crate::domain::SvgSplitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Extension of every exported file
pub const SVG_EXTENSION: &str = ".svg";

/// SVG compatibility tier written into the exported root element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SvgProfile {
    /// SVG 1.0
    Svg10,
    /// SVG 1.1
    #[default]
    Svg11,
    /// SVG Tiny 1.1
    SvgTiny11,
    /// SVG Tiny 1.2
    SvgTiny12,
    /// SVG Basic 1.1
    SvgBasic11,
}

impl SvgProfile {
    /// Value of the root `version` attribute
    pub fn version(&self) -> &'static str {
        match self {
            SvgProfile::Svg10 => "1.0",
            SvgProfile::Svg11 | SvgProfile::SvgTiny11 | SvgProfile::SvgBasic11 => "1.1",
            SvgProfile::SvgTiny12 => "1.2",
        }
    }

    /// Value of the root `baseProfile` attribute
    pub fn base_profile(&self) -> Option<&'static str> {
        match self {
            SvgProfile::SvgTiny11 | SvgProfile::SvgTiny12 => Some("tiny"),
            SvgProfile::SvgBasic11 => Some("basic"),
            SvgProfile::Svg10 | SvgProfile::Svg11 => None,
        }
    }

    /// DOCTYPE body for the profile. SVG Tiny 1.2 has none.
    pub fn doctype(&self) -> Option<&'static str> {
        match self {
            SvgProfile::Svg10 => Some(
                r#"svg PUBLIC "-//W3C//DTD SVG 1.0//EN" "http://www.w3.org/TR/2001/REC-SVG-20010904/DTD/svg10.dtd""#,
            ),
            SvgProfile::Svg11 => Some(
                r#"svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd""#,
            ),
            SvgProfile::SvgTiny11 => Some(
                r#"svg PUBLIC "-//W3C//DTD SVG 1.1 Tiny//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11-tiny.dtd""#,
            ),
            SvgProfile::SvgBasic11 => Some(
                r#"svg PUBLIC "-//W3C//DTD SVG 1.1 Basic//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11-basic.dtd""#,
            ),
            SvgProfile::SvgTiny12 => None,
        }
    }

    /// Write `version` and `baseProfile` onto an exported root
    pub fn apply(&self, root: &mut ElementNode) {
        root.set_attr("version", self.version());
        match self.base_profile() {
            Some(profile) => root.set_attr("baseProfile", profile),
            None => {
                root.remove_attr("baseProfile");
            }
        }
    }
}

impl FromStr for SvgProfile {
    type Err = SvgSplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "svg10" => Ok(SvgProfile::Svg10),
            "svg11" => Ok(SvgProfile::Svg11),
            "svg-tiny11" => Ok(SvgProfile::SvgTiny11),
            "svg-tiny12" => Ok(SvgProfile::SvgTiny12),
            "svg-basic11" => Ok(SvgProfile::SvgBasic11),
            _ => Err(SvgSplitError::Configuration(format!(
                "Invalid SVG profile '{s}'. Must be one of: svg10, svg11, svg-tiny11, svg-tiny12, svg-basic11"
            ))),
        }
    }
}

impl fmt::Display for SvgProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SvgProfile::Svg10 => "svg10",
            SvgProfile::Svg11 => "svg11",
            SvgProfile::SvgTiny11 => "svg-tiny11",
            SvgProfile::SvgTiny12 => "svg-tiny12",
            SvgProfile::SvgBasic11 => "svg-basic11",
        };
        f.write_str(name)
    }
}

/// What to do when two elements of one run resolve to the same file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionPolicy {
    /// Later elements silently replace earlier ones
    #[default]
    Overwrite,
    /// Abort the run on the first collision
    Fail,
    /// Append `-2`, `-3`, … before the extension
    AutoSuffix,
}

impl FromStr for CollisionPolicy {
    type Err = SvgSplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "overwrite" => Ok(CollisionPolicy::Overwrite),
            "fail" => Ok(CollisionPolicy::Fail),
            "auto-suffix" => Ok(CollisionPolicy::AutoSuffix),
            _ => Err(SvgSplitError::Configuration(format!(
                "Invalid collision policy '{s}'. Must be one of: overwrite, fail, auto-suffix"
            ))),
        }
    }
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CollisionPolicy::Overwrite => "overwrite",
            CollisionPolicy::Fail => "fail",
            CollisionPolicy::AutoSuffix => "auto-suffix",
        };
        f.write_str(name)
    }
}

/// Options applied to every element of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Compatibility tier
    pub profile: SvgProfile,
    /// Inline linked raster images as data URIs
    pub embed_raster_images: bool,
    /// Emit the profile DOCTYPE
    pub doctype: bool,
    /// Emit the XML declaration
    pub xml_declaration: bool,
    /// Indent the output
    pub pretty: bool,
    /// Output name collision handling
    pub collision_policy: CollisionPolicy,
}

/// Builder of [`ExportOptions`]
#[derive(Debug, Clone)]
pub struct ExportConfiguration {
    options: ExportOptions,
}

impl ExportConfiguration {
    /// Create from the `[export]` section of the configuration file
    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            options: ExportOptions {
                profile: config.profile,
                embed_raster_images: config.embed_raster_images,
                doctype: config.doctype,
                xml_declaration: config.xml_declaration,
                pretty: config.pretty,
                collision_policy: config.collision_policy,
            },
        }
    }

    /// Options for one run
    pub fn build_options(&self) -> ExportOptions {
        self.options
    }
}

impl Default for ExportConfiguration {
    fn default() -> Self {
        Self::from_config(&ExportConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ExportConfiguration::default().build_options();

        assert_eq!(options.profile, SvgProfile::Svg11);
        assert!(!options.embed_raster_images);
        assert!(!options.doctype);
        assert!(options.xml_declaration);
        assert!(options.pretty);
        assert_eq!(options.collision_policy, CollisionPolicy::Overwrite);
    }

    #[test]
    fn test_build_options_is_stable() {
        let configuration = ExportConfiguration::default();
        assert_eq!(configuration.build_options(), configuration.build_options());
    }

    #[test]
    fn test_from_config() {
        let config = ExportConfig {
            profile: SvgProfile::SvgTiny11,
            embed_raster_images: true,
            collision_policy: CollisionPolicy::AutoSuffix,
            ..ExportConfig::default()
        };
        let options = ExportConfiguration::from_config(&config).build_options();

        assert_eq!(options.profile, SvgProfile::SvgTiny11);
        assert!(options.embed_raster_images);
        assert_eq!(options.collision_policy, CollisionPolicy::AutoSuffix);
    }

    #[test]
    fn test_profile_apply() {
        let mut root = ElementNode::new("svg");
        root.set_attr("baseProfile", "full");

        SvgProfile::SvgTiny12.apply(&mut root);
        assert_eq!(root.attr("version").as_deref(), Some("1.2"));
        assert_eq!(root.attr("baseProfile").as_deref(), Some("tiny"));

        SvgProfile::Svg11.apply(&mut root);
        assert_eq!(root.attr("version").as_deref(), Some("1.1"));
        assert!(root.attr("baseProfile").is_none());
    }

    #[test]
    fn test_profile_doctype() {
        assert!(SvgProfile::Svg11.doctype().unwrap().contains("SVG 1.1//EN"));
        assert!(SvgProfile::SvgTiny12.doctype().is_none());
    }

    #[test]
    fn test_profile_from_str_round_trip() {
        for profile in [
            SvgProfile::Svg10,
            SvgProfile::Svg11,
            SvgProfile::SvgTiny11,
            SvgProfile::SvgTiny12,
            SvgProfile::SvgBasic11,
        ] {
            assert_eq!(profile.to_string().parse::<SvgProfile>().unwrap(), profile);
        }
        assert!("svg2".parse::<SvgProfile>().is_err());
    }

    #[test]
    fn test_collision_policy_from_str() {
        assert_eq!(
            "AUTO-SUFFIX".parse::<CollisionPolicy>().unwrap(),
            CollisionPolicy::AutoSuffix
        );
        assert!("rename".parse::<CollisionPolicy>().is_err());
    }

    #[test]
    fn test_collision_policy_serde_names() {
        let json = serde_json::to_string(&CollisionPolicy::AutoSuffix).unwrap();
        assert_eq!(json, "\"auto-suffix\"");
        let profile: SvgProfile = serde_json::from_str("\"svg-basic11\"").unwrap();
        assert_eq!(profile, SvgProfile::SvgBasic11);
    }
}
