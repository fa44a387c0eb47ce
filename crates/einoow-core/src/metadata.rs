//! Document metadata (title, description, canonical link, social previews)
//! for the active page view.
//!
//! The document itself is an external collaborator reached through
//! [`MetadataSink`]; the browser client writes into `<head>`, tests use a
//! recording fake.

use crate::config::SiteConfig;

/// Open Graph object type of a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OgType {
    #[default]
    Website,
    Article,
}

impl OgType {
    pub fn as_str(self) -> &'static str {
        match self {
            OgType::Website => "website",
            OgType::Article => "article",
        }
    }
}

/// Per-view overrides. Every `None` falls back to the site default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoProps {
    pub title: Option<String>,
    pub description: Option<String>,
    pub canonical_path: String,
    pub og_type: OgType,
    /// Absolute preview image URL.
    pub og_image: Option<String>,
    pub no_index: bool,
}

impl Default for SeoProps {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            canonical_path: "/".to_string(),
            og_type: OgType::Website,
            og_image: None,
            no_index: false,
        }
    }
}

/// Fully resolved metadata values for one view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataBundle {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub og_type: OgType,
    pub og_image: String,
    pub indexable: bool,
}

impl MetadataBundle {
    pub fn compose(props: &SeoProps, site: &SiteConfig) -> Self {
        let title = match &props.title {
            Some(title) => format!("{title} | {}", site.site_name),
            None => site.site_name.clone(),
        };
        let description = props
            .description
            .clone()
            .unwrap_or_else(|| site.default_description.clone());
        let og_image = props
            .og_image
            .clone()
            .unwrap_or_else(|| site.og_image_fallback());

        Self {
            title,
            description,
            canonical_url: site.absolute_url(&props.canonical_path),
            og_type: props.og_type,
            og_image,
            indexable: !props.no_index,
        }
    }

    pub fn robots(&self) -> &'static str {
        if self.indexable {
            "index, follow"
        } else {
            "noindex, nofollow"
        }
    }

    /// Value written into `slot`.
    pub fn value(&self, slot: MetaSlot) -> &str {
        match slot {
            MetaSlot::DocumentTitle | MetaSlot::Title => &self.title,
            MetaSlot::Description => &self.description,
            MetaSlot::Robots => self.robots(),
            MetaSlot::Canonical => &self.canonical_url,
            MetaSlot::OgTitle | MetaSlot::TwitterTitle => &self.title,
            MetaSlot::OgDescription | MetaSlot::TwitterDescription => &self.description,
            MetaSlot::OgUrl | MetaSlot::TwitterUrl => &self.canonical_url,
            MetaSlot::OgType => self.og_type.as_str(),
            MetaSlot::OgImage | MetaSlot::TwitterImage => &self.og_image,
            MetaSlot::TwitterCard => "summary_large_image",
        }
    }
}

/// Element kind backing a metadata slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotTag {
    Title,
    Meta,
    Link,
}

/// Document metadata slots written on view activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetaSlot {
    DocumentTitle,
    Title,
    Description,
    Robots,
    Canonical,
    OgTitle,
    OgDescription,
    OgUrl,
    OgType,
    OgImage,
    TwitterCard,
    TwitterTitle,
    TwitterDescription,
    TwitterUrl,
    TwitterImage,
}

impl MetaSlot {
    /// Write order on activation.
    pub const ALL: [MetaSlot; 15] = [
        MetaSlot::DocumentTitle,
        MetaSlot::Title,
        MetaSlot::Description,
        MetaSlot::Robots,
        MetaSlot::Canonical,
        MetaSlot::OgTitle,
        MetaSlot::OgDescription,
        MetaSlot::OgUrl,
        MetaSlot::OgType,
        MetaSlot::OgImage,
        MetaSlot::TwitterCard,
        MetaSlot::TwitterTitle,
        MetaSlot::TwitterDescription,
        MetaSlot::TwitterUrl,
        MetaSlot::TwitterImage,
    ];

    pub fn tag(self) -> SlotTag {
        match self {
            MetaSlot::DocumentTitle => SlotTag::Title,
            MetaSlot::Canonical => SlotTag::Link,
            _ => SlotTag::Meta,
        }
    }

    /// Identifying attribute pair, e.g. `("property", "og:title")`.
    pub fn key(self) -> (&'static str, &'static str) {
        match self {
            MetaSlot::DocumentTitle => ("", ""),
            MetaSlot::Title => ("name", "title"),
            MetaSlot::Description => ("name", "description"),
            MetaSlot::Robots => ("name", "robots"),
            MetaSlot::Canonical => ("rel", "canonical"),
            MetaSlot::OgTitle => ("property", "og:title"),
            MetaSlot::OgDescription => ("property", "og:description"),
            MetaSlot::OgUrl => ("property", "og:url"),
            MetaSlot::OgType => ("property", "og:type"),
            MetaSlot::OgImage => ("property", "og:image"),
            MetaSlot::TwitterCard => ("property", "twitter:card"),
            MetaSlot::TwitterTitle => ("property", "twitter:title"),
            MetaSlot::TwitterDescription => ("property", "twitter:description"),
            MetaSlot::TwitterUrl => ("property", "twitter:url"),
            MetaSlot::TwitterImage => ("property", "twitter:image"),
        }
    }

    /// Attribute holding the value.
    pub fn value_attr(self) -> &'static str {
        match self.tag() {
            SlotTag::Title => "",
            SlotTag::Meta => "content",
            SlotTag::Link => "href",
        }
    }

    /// CSS selector locating the slot in `<head>`.
    pub fn selector(self) -> String {
        let (attr, value) = self.key();
        match self.tag() {
            SlotTag::Title => "title".to_string(),
            SlotTag::Meta => format!("meta[{attr}=\"{value}\"]"),
            SlotTag::Link => format!("link[{attr}=\"{value}\"]"),
        }
    }
}

/// Writable document metadata.
pub trait MetadataSink {
    /// Update the slot in place, or create it when absent. Never inserts a duplicate.
    fn upsert(&mut self, slot: MetaSlot, value: &str);
}

/// What a view teardown puts back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RestorePolicy {
    /// Only the document title returns to the site name.
    TitleOnly,
    /// Every slot returns to the site defaults.
    #[default]
    AllFields,
}

/// Pushes per-view metadata into a [`MetadataSink`].
pub struct MetadataSynchronizer<S: MetadataSink> {
    sink: S,
    site: SiteConfig,
    policy: RestorePolicy,
    active: Option<MetadataBundle>,
}

impl<S: MetadataSink> MetadataSynchronizer<S> {
    pub fn new(sink: S, site: SiteConfig) -> Self {
        let policy = if site.restore_all_on_leave {
            RestorePolicy::AllFields
        } else {
            RestorePolicy::TitleOnly
        };
        Self {
            sink,
            site,
            policy,
            active: None,
        }
    }

    pub fn with_policy(mut self, policy: RestorePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Write every slot for the view being entered.
    pub fn activate(&mut self, props: &SeoProps) {
        let bundle = MetadataBundle::compose(props, &self.site);
        if self.active.as_ref() == Some(&bundle) {
            return;
        }
        for slot in MetaSlot::ALL {
            self.sink.upsert(slot, bundle.value(slot));
        }
        tracing::debug!(title = %bundle.title, url = %bundle.canonical_url, "metadata activated");
        self.active = Some(bundle);
    }

    /// Restore defaults for the view being left.
    pub fn deactivate(&mut self) {
        self.active = None;
        match self.policy {
            RestorePolicy::TitleOnly => {
                self.sink
                    .upsert(MetaSlot::DocumentTitle, &self.site.site_name);
            },
            RestorePolicy::AllFields => {
                let defaults = MetadataBundle::compose(&SeoProps::default(), &self.site);
                for slot in MetaSlot::ALL {
                    self.sink.upsert(slot, defaults.value(slot));
                }
            },
        }
    }

    pub fn active(&self) -> Option<&MetadataBundle> {
        self.active.as_ref()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
