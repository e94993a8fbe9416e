use super::*;
use crate::foundation::core::{Transform2D, Vec2};
use crate::layer::model::{GroupLayer, PathLayer};
use crate::path::model::Path;

fn path_layer(id: &str, d: &str) -> Layer {
    Layer::Path(PathLayer {
        id: id.to_owned(),
        path_data: Path::parse(d).unwrap(),
        fill_color: None,
        stroke_color: None,
        fill_alpha: None,
        stroke_alpha: None,
        stroke_width: Some(1.0),
    })
}

fn vector(children: Vec<Layer>) -> VectorLayer {
    VectorLayer {
        id: "vector".to_owned(),
        width: 24.0,
        height: 24.0,
        alpha: 1.0,
        children,
    }
}

#[test]
fn empty_tree_has_no_projection() {
    let v = vector(Vec::new());
    assert!(closest_projection(&v, Point::new(1.0, 1.0)).is_none());
    assert!(split_closest(&v, Point::new(1.0, 1.0)).unwrap().is_none());
}

#[test]
fn closest_layer_wins() {
    let v = vector(vec![
        path_layer("top", "M 0,0 L 20,0"),
        path_layer("bottom", "M 0,10 L 20,10"),
    ]);
    let hit = closest_projection(&v, Point::new(5.0, 8.0)).unwrap();
    assert_eq!(hit.layer_id, "bottom");
    assert_eq!(hit.canvas_point, Point::new(5.0, 10.0));
    assert_eq!(hit.canvas_distance_sq, 4.0);
}

#[test]
fn equal_distance_keeps_first_visited_layer() {
    let v = vector(vec![
        path_layer("top", "M 0,0 L 20,0"),
        path_layer("bottom", "M 0,10 L 20,10"),
    ]);
    let hit = closest_projection(&v, Point::new(5.0, 5.0)).unwrap();
    assert_eq!(hit.layer_id, "top");
}

#[test]
fn group_transform_is_inverted_for_local_projection() {
    let group = Layer::Group(GroupLayer {
        id: "g".to_owned(),
        transform: Transform2D {
            translate: Vec2::new(100.0, 0.0),
            ..Transform2D::default()
        },
        children: vec![path_layer("moved", "M 0,0 L 10,0")],
    });
    let v = vector(vec![group, path_layer("origin", "M 0,50 L 10,50")]);
    let hit = closest_projection(&v, Point::new(104.0, 1.0)).unwrap();
    assert_eq!(hit.layer_id, "moved");
    assert!((hit.projection.point.x - 4.0).abs() < 1e-9);
    assert!((hit.canvas_point.x - 104.0).abs() < 1e-9);
}

#[test]
fn split_closest_replaces_only_the_hit_layer() {
    let v = vector(vec![
        path_layer("a", "M 0,0 L 8,0"),
        path_layer("b", "M 0,20 L 8,20"),
    ]);
    let out = split_closest(&v, Point::new(4.0, 1.0)).unwrap().unwrap();
    let a = out.find_path_layer("a").unwrap();
    assert_eq!(a.path_data.to_path_string(), "M 0,0 L 4,0 L 8,0");
    assert!(a.path_data.has_split_command());
    assert_eq!(
        out.find_path_layer("b").unwrap().path_data,
        v.find_path_layer("b").unwrap().path_data
    );
}
