//! Handler configuration reader.
//!
//! The configuration is an XML document rooted at `<Handlers>` with one child
//! element per handler. A handler is enabled when its element carries an
//! `enable` attribute that reads as true:
//!
//! ```xml
//! <Handlers>
//!   <Foo enable="true"/>
//!   <Bar enable="false"/>
//!   <Qux enable="true"/>
//! </Handlers>
//! ```
//!
//! [`HandlerConfig::load`] never fails. A missing or malformed file yields a
//! configuration in which every lookup answers `false`. Use
//! [`HandlerConfig::load_strict`] to get the failure instead.

use std::{fs, path::Path, str::FromStr};
use switchboard_core::ConfigError;

/// File read by the `switchboard` binary, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "handlers.xml";

/// Name of the document root.
pub const ROOT_ELEMENT: &str = "Handlers";

/// Attribute holding a handler's flag.
pub const ENABLE_ATTRIBUTE: &str = "enable";

/// One child of the root element.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ElementEntry {
    name: String,
    enable: Option<String>,
}

/// Parsed handler configuration.
///
/// Holds the root's child elements in document order, or nothing at all when
/// the document could not be loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandlerConfig {
    elements: Option<Vec<ElementEntry>>,
}

impl HandlerConfig {
    /// A configuration with no document behind it. Every handler is disabled.
    pub fn unavailable() -> Self {
        Self { elements: None }
    }

    /// Loads `path`, falling back to [`HandlerConfig::unavailable`] on any
    /// failure.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::read(path) {
            Ok(config) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(path = %path.display(), "loaded handler configuration");
                config
            }
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    path = %path.display(),
                    error = %err,
                    "handler configuration unavailable, all handlers disabled"
                );
                #[cfg(not(feature = "tracing"))]
                let _ = err;
                Self::unavailable()
            }
        }
    }

    /// Loads `path` and rejects anything the lenient loader would paper over:
    /// an unreadable file, a malformed document, a foreign root element, or an
    /// `enable` value that is not a boolean.
    pub fn load_strict(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::read(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a configuration document held in memory.
    ///
    /// Checks well-formedness and the root element name. Flag values are not
    /// checked; see [`HandlerConfig::validate`].
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..Default::default()
        };
        let document = roxmltree::Document::parse_with_options(text, options).map_err(|err| {
            ConfigError::Parse {
                path: None,
                source: Box::new(err),
            }
        })?;

        let root = document.root_element();
        let root_name = root.tag_name().name();
        if root_name != ROOT_ELEMENT {
            return Err(ConfigError::UnexpectedRoot {
                found: root_name.to_string(),
            });
        }

        let elements = root
            .children()
            .filter(|node| node.is_element())
            .map(|node| ElementEntry {
                name: node.tag_name().name().to_string(),
                enable: node.attribute(ENABLE_ATTRIBUTE).map(str::to_string),
            })
            .collect();

        Ok(Self {
            elements: Some(elements),
        })
    }

    /// Checks that every `enable` attribute present reads as a boolean.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some(elements) = &self.elements else {
            return Ok(());
        };
        let invalid = elements.iter().find_map(|element| {
            let value = element.enable.as_ref()?;
            parse_flag(value).is_none().then(|| (element, value))
        });
        match invalid {
            Some((element, value)) => Err(ConfigError::InvalidFlag {
                element: element.name.clone(),
                value: value.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Whether a `Handlers` document was loaded.
    pub fn is_available(&self) -> bool {
        self.elements.is_some()
    }

    /// Whether the handler called `name` is enabled.
    ///
    /// `false` when the document, the element, or its `enable` attribute is
    /// missing, and when the attribute does not read as a boolean.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.flag(name).unwrap_or(false)
    }

    /// The parsed `enable` flag of the first element called `name`.
    pub fn flag(&self, name: &str) -> Option<bool> {
        self.element(name)?.enable.as_deref().and_then(parse_flag)
    }

    fn element(&self, name: &str) -> Option<&ElementEntry> {
        self.elements
            .as_ref()?
            .iter()
            .find(|element| element.name == name)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|err| err.with_path(path))
    }
}

impl FromStr for HandlerConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Reads a boolean attribute value.
///
/// An integer prefix wins first: leading whitespace is skipped, then a
/// `0x`/`0X` hexadecimal or an optionally signed decimal run of digits is read
/// and anything after it ignored, so `1abc` and `0x1` are true. Otherwise the
/// whole text must be exactly `true`/`false`, capitalised or upper case.
pub fn parse_flag(text: &str) -> Option<bool> {
    if let Some(nonzero) = leading_integer(text) {
        return Some(nonzero);
    }
    match text {
        "true" | "True" | "TRUE" => Some(true),
        "false" | "False" | "FALSE" => Some(false),
        _ => None,
    }
}

/// Whether the integer at the start of `text` is non-zero, `None` when there
/// are no digits to read.
fn leading_integer(text: &str) -> Option<bool> {
    let text = text.trim_start();
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        let digits: Vec<char> = hex.chars().take_while(char::is_ascii_hexdigit).collect();
        if !digits.is_empty() {
            return Some(digits.iter().any(|&digit| digit != '0'));
        }
    }
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let digits: Vec<char> = unsigned
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    if digits.is_empty() {
        return None;
    }
    Some(digits.iter().any(|&digit| digit != '0'))
}
