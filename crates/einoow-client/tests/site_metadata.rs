use std::cell::RefCell;
use std::rc::Rc;

use einoow_core::catalog::Catalog;
use einoow_core::config::SiteConfig;
use einoow_core::metadata::{MetaSlot, MetadataSynchronizer, RestorePolicy};
use einoow_core::pages::{ABOUT_DESCRIPTION, seo_for};
use einoow_core::route::Route;
use einoow_core::test_helpers::RecordingSink;

type SharedSink = Rc<RefCell<RecordingSink>>;

fn setup(policy: RestorePolicy) -> (SharedSink, MetadataSynchronizer<SharedSink>) {
    let sink = Rc::new(RefCell::new(RecordingSink::default()));
    let sync =
        MetadataSynchronizer::new(Rc::clone(&sink), SiteConfig::default()).with_policy(policy);
    (sink, sync)
}

#[test]
fn walking_the_site_keeps_one_element_per_slot() {
    let catalog = Catalog::bundled().unwrap();
    let site = SiteConfig::default();
    let (sink, mut sync) = setup(RestorePolicy::AllFields);

    let featured = format!("/play/{}", catalog.featured().unwrap().id);
    for path in ["/", "/about", featured.as_str(), "/play/ghost", "/"] {
        let route = Route::parse(path).unwrap();
        sync.deactivate();
        sync.activate(&seo_for(&route, &catalog, &site));
    }

    let sink = sink.borrow();
    assert_eq!(sink.element_count(), MetaSlot::ALL.len());
    for slot in MetaSlot::ALL {
        assert_eq!(sink.count(slot), 1, "{slot:?} must not be duplicated");
    }
    assert_eq!(sink.value(MetaSlot::DocumentTitle), Some("Einoow"));
}

#[test]
fn leaving_restores_title_before_next_view_writes() {
    let catalog = Catalog::bundled().unwrap();
    let site = SiteConfig::default();

    for policy in [RestorePolicy::TitleOnly, RestorePolicy::AllFields] {
        let (sink, mut sync) = setup(policy);
        sync.activate(&seo_for(&Route::About, &catalog, &site));
        assert_eq!(
            sink.borrow().value(MetaSlot::DocumentTitle),
            Some("About | Einoow")
        );

        sync.deactivate();
        assert_eq!(sink.borrow().value(MetaSlot::DocumentTitle), Some("Einoow"));
    }
}

#[test]
fn title_only_policy_leaves_stale_description() {
    let catalog = Catalog::bundled().unwrap();
    let site = SiteConfig::default();
    let (sink, mut sync) = setup(RestorePolicy::TitleOnly);

    sync.activate(&seo_for(&Route::About, &catalog, &site));
    sync.deactivate();

    assert_eq!(sink.borrow().value(MetaSlot::DocumentTitle), Some("Einoow"));
    assert_eq!(
        sink.borrow().value(MetaSlot::Description),
        Some(ABOUT_DESCRIPTION)
    );
    assert_eq!(
        sink.borrow().value(MetaSlot::Canonical),
        Some("https://einoow.com/about")
    );
}
