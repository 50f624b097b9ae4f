//! Test infrastructure for scenario tests.

use crate::model::{EntryId, Property, PropertyTemplate, Value};
use crate::package::MemoryPackage;

/// `StaticMeshActor SM1` with `Tag=5` and an export-flagged `Mesh` pointing
/// at `StaticMesh Cube`.
pub struct MeshScene {
    pub pkg: MemoryPackage,
    pub actor: EntryId,
    pub mesh: EntryId,
}

impl MeshScene {
    pub fn new() -> Self {
        let mut pkg = MemoryPackage::new("MyMap");
        let mesh = pkg.add_export(Some("StaticMesh"), "Cube");
        let actor = pkg.add_export(Some("StaticMeshActor"), "SM1");
        let mesh_ref = pkg.reference(mesh).unwrap();
        pkg.set_properties(
            actor,
            vec![
                int("Tag", 5),
                exported_object("Mesh", mesh_ref),
            ],
        );
        Self { pkg, actor, mesh }
    }
}

pub fn int(name: &str, value: i32) -> Property {
    Property::new(name, PropertyTemplate::int()).with_value(value)
}

pub fn exported_object(name: &str, reference: i32) -> Property {
    Property::new(name, PropertyTemplate::object().exported()).with_value(Value::Object(reference))
}

pub fn exported_objects(name: &str, references: &[i32]) -> Property {
    let items = references.iter().map(|r| Value::Object(*r)).collect();
    Property::new(name, PropertyTemplate::array(PropertyTemplate::object().exported()))
        .with_value(Value::Array(items))
}
