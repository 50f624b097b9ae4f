//! End-to-end rendering scenarios.

use std::sync::Arc;

use super::fixtures::{exported_object, exported_objects, int, MeshScene};
use super::{RenderError, T3d};
use crate::config::{ConfigBuilder, LineEnding};
use crate::model::{EnumType, Property, PropertyTemplate, Value};
use crate::package::{MemoryPackage, Package};

#[test]
fn test_static_mesh_actor() {
    let scene = MeshScene::new();
    let text = T3d::new(&scene.pkg).render_export(scene.actor, 0).unwrap();
    assert_eq!(
        text,
        "Begin Actor Class=StaticMesh Name=Cube\n\
         End Actor\n\
         Begin Actor Class=StaticMeshActor Name=SM1\n  \
         Tag=5\n  \
         Mesh=\"Cube\"\n\
         End Actor"
    );
}

#[test]
fn test_sub_object_alone() {
    let scene = MeshScene::new();
    let text = T3d::new(&scene.pkg).render_export(scene.mesh, 0).unwrap();
    assert_eq!(text, "Begin Actor Class=StaticMesh Name=Cube\nEnd Actor");
}

#[test]
fn test_crlf_and_tabs() {
    let scene = MeshScene::new();
    let config = ConfigBuilder::new()
        .indent_unit("\t")
        .line_ending(LineEnding::CrLf)
        .build();
    let text = T3d::with_config(&scene.pkg, config)
        .render_export(scene.actor, 0)
        .unwrap();
    assert_eq!(
        text,
        "Begin Actor Class=StaticMesh Name=Cube\r\nEnd Actor\r\n\
         Begin Actor Class=StaticMeshActor Name=SM1\r\n\tTag=5\r\n\tMesh=\"Cube\"\r\nEnd Actor"
    );
}

#[test]
fn test_nested_exports_flatten_in_dependency_order() {
    let mut pkg = MemoryPackage::new("Map");
    let c = pkg.add_export(Some("Material"), "C");
    let b = pkg.add_export(Some("StaticMesh"), "B");
    let a = pkg.add_export(Some("StaticMeshActor"), "A");
    let (b_ref, c_ref) = (pkg.reference(b).unwrap(), pkg.reference(c).unwrap());
    pkg.set_properties(b, vec![exported_object("Material", c_ref)]);
    pkg.set_properties(a, vec![exported_object("Mesh", b_ref)]);

    let text = T3d::new(&pkg).render_export(a, 0).unwrap();
    assert_eq!(
        text,
        "Begin Actor Class=Material Name=C\nEnd Actor\n\
         Begin Actor Class=StaticMesh Name=B\n  Material=\"C\"\nEnd Actor\n\
         Begin Actor Class=StaticMeshActor Name=A\n  Mesh=\"B\"\nEnd Actor"
    );
}

#[test]
fn test_array_element_exports() {
    let mut pkg = MemoryPackage::new("Map");
    let s0 = pkg.add_export(Some("Emitter"), "Sprite0");
    let s1 = pkg.add_export(Some("Emitter"), "Sprite1");
    let fx = pkg.add_export(Some("Emitter"), "Fx");
    let refs = [pkg.reference(s0).unwrap(), pkg.reference(s1).unwrap()];
    pkg.set_properties(fx, vec![exported_objects("Emitters", &refs)]);

    let text = T3d::new(&pkg).render_export(fx, 0).unwrap();
    assert_eq!(
        text,
        "Begin Actor Class=Emitter Name=Sprite0\nEnd Actor\n\
         Begin Actor Class=Emitter Name=Sprite1\nEnd Actor\n\
         Begin Actor Class=Emitter Name=Fx\n  Emitters(0)=\"Sprite0\"\n  Emitters(1)=\"Sprite1\"\nEnd Actor"
    );
}

#[test]
fn test_duplicate_reference_written_once() {
    let mut pkg = MemoryPackage::new("Map");
    let mesh = pkg.add_export(Some("StaticMesh"), "Cube");
    let actor = pkg.add_export(Some("StaticMeshActor"), "SM1");
    let mesh_ref = pkg.reference(mesh).unwrap();
    pkg.set_properties(
        actor,
        vec![
            exported_object("Mesh", mesh_ref),
            exported_object("LodMesh", mesh_ref),
        ],
    );

    let text = T3d::new(&pkg).render_export(actor, 0).unwrap();
    assert_eq!(text.matches("Name=Cube").count(), 1);
    assert!(text.ends_with("  Mesh=\"Cube\"\n  LodMesh=\"Cube\"\nEnd Actor"));
}

#[test]
fn test_document_repeats_shared_sub_object() {
    let mut pkg = MemoryPackage::new("Map");
    let mesh = pkg.add_export(Some("StaticMesh"), "Cube");
    let a = pkg.add_export(Some("StaticMeshActor"), "SM1");
    let b = pkg.add_export(Some("StaticMeshActor"), "SM2");
    let mesh_ref = pkg.reference(mesh).unwrap();
    pkg.set_properties(a, vec![exported_object("Mesh", mesh_ref)]);
    pkg.set_properties(b, vec![exported_object("Mesh", mesh_ref)]);

    let text = T3d::new(&pkg).render_document(&[a, b]).unwrap();
    assert_eq!(text.matches("Begin Actor Class=StaticMesh Name=Cube").count(), 2);
    assert_eq!(text.matches("Begin Actor").count(), text.matches("End Actor").count());
}

#[test]
fn test_cycle_fails_fast() {
    let mut pkg = MemoryPackage::new("Map");
    let a = pkg.add_export(Some("Actor"), "A");
    let b = pkg.add_export(Some("Actor"), "B");
    let (a_ref, b_ref) = (pkg.reference(a).unwrap(), pkg.reference(b).unwrap());
    pkg.set_properties(a, vec![exported_object("Next", b_ref)]);
    pkg.set_properties(b, vec![exported_object("Next", a_ref)]);

    let err = T3d::new(&pkg).render_export(a, 0).unwrap_err();
    assert_eq!(
        err,
        RenderError::CyclicExport {
            entry: "Map.A".into(),
            chain: vec!["Map.A".into(), "Map.B".into(), "Map.A".into()],
        }
    );
}

#[test]
fn test_self_reference_fails_fast() {
    let mut pkg = MemoryPackage::new("Map");
    let a = pkg.add_export(Some("Actor"), "A");
    let a_ref = pkg.reference(a).unwrap();
    pkg.set_properties(a, vec![exported_objects("Children", &[a_ref])]);

    assert!(matches!(
        T3d::new(&pkg).render_export(a, 0),
        Err(RenderError::CyclicExport { .. })
    ));
}

#[test]
fn test_unflagged_cycle_is_plain_reference() {
    let mut pkg = MemoryPackage::new("Map");
    let a = pkg.add_export(Some("Actor"), "A");
    let a_ref = pkg.reference(a).unwrap();
    pkg.set_properties(
        a,
        vec![Property::new("Owner", PropertyTemplate::object()).with_value(Value::Object(a_ref))],
    );

    let text = T3d::new(&pkg).render_export(a, 0).unwrap();
    assert_eq!(text, "Begin Actor Class=Actor Name=A\n  Owner=Actor'A'\nEnd Actor");
}

#[test]
fn test_depth_limit() {
    let scene = MeshScene::new();
    let config = ConfigBuilder::new().max_depth(1).build();
    let err = T3d::with_config(&scene.pkg, config)
        .render_export(scene.actor, 0)
        .unwrap_err();
    assert_eq!(
        err,
        RenderError::DepthLimit {
            entry: "MyMap.Cube".into(),
            limit: 1,
        }
    );
}

#[test]
fn test_dangling_reference_aborts() {
    let mut pkg = MemoryPackage::new("Map");
    let a = pkg.add_export(Some("Actor"), "A");
    pkg.set_properties(a, vec![int("Tag", 1), exported_object("Mesh", 42)]);

    assert_eq!(
        T3d::new(&pkg).render_export(a, 0),
        Err(RenderError::UnresolvedReference { index: 42 })
    );
}

#[test]
fn test_imports_never_expand() {
    let mut pkg = MemoryPackage::new("Map");
    let weapon = pkg.add_import("Weapon", "Pkg.Weap1");
    let a = pkg.add_export(Some("Pawn"), "P0");
    pkg.set_properties(a, vec![exported_object("Weapon", weapon)]);

    let text = T3d::new(&pkg).render_export(a, 0).unwrap();
    assert_eq!(text, "Begin Actor Class=Pawn Name=P0\n  Weapon=Weapon'Pkg.Weap1'\nEnd Actor");
}

#[test]
fn test_every_kind() {
    let mut pkg = MemoryPackage::new("Map");
    let tag = pkg.intern_name("Door");
    let texture = pkg.add_import("Texture", "Engine.DefaultTexture");
    let physics = Arc::new(EnumType::new("EPhysics", ["PHYS_None", "PHYS_Walking", "PHYS_Falling"]));
    let color = vec![
        Property::new("R", PropertyTemplate::byte()).with_value(Value::Byte(255)),
        Property::new("G", PropertyTemplate::byte()).with_value(Value::Byte(128)),
    ];
    let a = pkg.add_export(Some("Mover"), "Mover0");
    pkg.set_properties(
        a,
        vec![
            Property::new("Physics", PropertyTemplate::enum_byte(physics)).with_value(Value::Byte(2)),
            Property::new("StepSize", PropertyTemplate::byte()).with_value(Value::Byte(7)),
            int("MoveTime", -3),
            Property::new("bHidden", PropertyTemplate::bool()).with_value(true),
            Property::new("DrawScale", PropertyTemplate::float()).with_value(1.5f32),
            Property::new("Skin", PropertyTemplate::object()).with_value(Value::Object(texture)),
            Property::new("Tag", PropertyTemplate::name()).with_value(Value::Name(tag)),
            Property::new("Keys", PropertyTemplate::array(PropertyTemplate::int()))
                .with_value(Value::Array(vec![Value::Int(0), Value::Int(10)])),
            Property::new("LightColor", PropertyTemplate::structure("Color"))
                .with_value(Value::Struct(Some(color))),
            Property::new("Message", PropertyTemplate::str()).with_value("Open"),
        ],
    );

    let entry = pkg.export_entry(a).unwrap();
    let object = pkg.instantiate(entry).unwrap();
    let rendered = T3d::new(&pkg).render_properties(&object, 1).unwrap();
    assert_eq!(
        rendered.lines,
        [
            "Physics=PHYS_Falling",
            "StepSize=7",
            "MoveTime=-3",
            "bHidden=true",
            "DrawScale=1.500000",
            "Skin=Texture'Engine.DefaultTexture'",
            "Tag='Door'",
            "Keys(0)=0",
            "Keys(1)=10",
            "LightColor=(R=255,G=128)",
            "Message=\"Open\"",
        ]
    );
}

#[test]
fn test_dimension_line_count() {
    let mut pkg = MemoryPackage::new("Map");
    let a = pkg.add_export(Some("Actor"), "A");
    pkg.set_properties(
        a,
        vec![Property::new("Slots", PropertyTemplate::int().with_array_dimension(4))
            .with_values([1, 2, 3, 4])],
    );

    let text = T3d::new(&pkg).render_export(a, 0).unwrap();
    let lines: Vec<_> = text.lines().filter(|l| l.trim_start().starts_with("Slots")).collect();
    assert_eq!(lines, ["  Slots[0]=1", "  Slots[1]=2", "  Slots[2]=3", "  Slots[3]=4"]);
}

#[test]
fn test_render_properties_exposes_preceding() {
    let scene = MeshScene::new();
    let entry = scene.pkg.export_entry(scene.actor).unwrap();
    let object = scene.pkg.instantiate(entry).unwrap();
    let rendered = T3d::new(&scene.pkg).render_properties(&object, 1).unwrap();
    assert_eq!(rendered.lines, ["Tag=5", "Mesh=\"Cube\""]);
    assert_eq!(
        rendered.preceding,
        ["Begin Actor Class=StaticMesh Name=Cube\nEnd Actor"]
    );
}
