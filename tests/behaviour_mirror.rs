//! Behaviour-driven tests for repository mirror selection.

use jarstrap::mirror::{
    DEFAULT_MIRROR_URL, MIRROR_ENV_VAR, MIRROR_PROPERTY, MirrorSelection, MirrorSelector,
    MirrorSource,
};
use jarstrap::properties::ProcessProperties;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Default)]
struct MirrorWorld {
    environment: Option<String>,
    property: Option<String>,
    selection: Option<MirrorSelection>,
}

#[fixture]
fn world() -> MirrorWorld {
    MirrorWorld::default()
}

#[given("the mirror environment variable is \"{url}\"")]
fn given_environment(world: &mut MirrorWorld, url: String) {
    world.environment = Some(url);
}

#[given("the mirror environment variable is empty")]
fn given_empty_environment(world: &mut MirrorWorld) {
    world.environment = Some(String::new());
}

#[given("the mirror property is \"{url}\"")]
fn given_property(world: &mut MirrorWorld, url: String) {
    world.property = Some(url);
}

#[given("no mirror overrides are configured")]
fn given_no_overrides(world: &mut MirrorWorld) {
    world.environment = None;
    world.property = None;
}

#[when("the mirror is selected")]
fn when_selected(world: &mut MirrorWorld) {
    let properties = world.property.as_ref().map_or_else(ProcessProperties::new, |url| {
        ProcessProperties::from_pairs([(MIRROR_PROPERTY, url.as_str())])
    });
    let environment = world.environment.clone();
    let selection = MirrorSelector::default().select_with(
        |name| {
            if name == MIRROR_ENV_VAR {
                environment.clone()
            } else {
                None
            }
        },
        &properties,
    );
    world.selection = Some(selection);
}

#[then("the selected mirror is \"{url}\"")]
fn then_selected(world: &mut MirrorWorld, url: String) {
    let selection = world.selection.as_ref().expect("selection made");
    assert_eq!(selection.url(), url);
}

#[then("the selected mirror is the default mirror")]
fn then_default(world: &mut MirrorWorld) {
    let selection = world.selection.as_ref().expect("selection made");
    assert_eq!(selection.url(), DEFAULT_MIRROR_URL);
    assert!(matches!(selection.source(), MirrorSource::BuiltinDefault));
}

#[then("the mirror came from the environment variable")]
fn then_from_environment(world: &mut MirrorWorld) {
    let selection = world.selection.as_ref().expect("selection made");
    assert_eq!(
        selection.source(),
        &MirrorSource::EnvironmentVariable(MIRROR_ENV_VAR.to_owned())
    );
}

#[then("the mirror came from the property")]
fn then_from_property(world: &mut MirrorWorld) {
    let selection = world.selection.as_ref().expect("selection made");
    assert_eq!(
        selection.source(),
        &MirrorSource::Property(MIRROR_PROPERTY.to_owned())
    );
}

#[scenario(
    path = "tests/features/mirror_selection.feature",
    name = "Environment variable overrides the property"
)]
fn scenario_environment_wins(world: MirrorWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/mirror_selection.feature",
    name = "Empty environment variable falls through to the property"
)]
fn scenario_empty_environment(world: MirrorWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/mirror_selection.feature",
    name = "No overrides select the default mirror"
)]
fn scenario_default_mirror(world: MirrorWorld) {
    let _ = world;
}
