use rigid_tf::{orientation_from_direction, Matrix4, Rpy, Transform, Vector3};
use uom::si::angle::degree;
use uom::si::f64::Angle;

fn main() {
    // a mobile base, 3 m east and 1 m north of the map origin, heading north-east
    let map_from_base = Transform::from_rotation(
        Rpy::default()
            .with_yaw(Angle::new::<degree>(45.))
            .to_quaternion(),
        Vector3::new(3., 1., 0.),
    );

    // an arm mounted on the base, whose tool is tilted down 20° and rolled by 5°
    let base_from_tool = Transform::from_rotation(
        Rpy::new(
            Angle::new::<degree>(5.),
            Angle::new::<degree>(20.),
            Angle::new::<degree>(0.),
        )
        .to_quaternion(),
        Vector3::new(0.4, 0., 0.8),
    );

    // chain them to find the tool in the map
    let map_from_tool = map_from_base * base_from_tool;
    println!("tool in map: {map_from_tool}");
    println!("tool orientation: {}", map_from_tool.rpy());

    // the same thing as a homogeneous matrix, eg, to hand to a renderer
    let matrix: Matrix4 = map_from_tool.into();
    println!("homogeneous form: {matrix}");

    // a point the tool sees 1 m straight ahead, in map coordinates
    let target = map_from_tool * Vector3::new(1., 0., 0.);
    println!("target in map: {target:?}");

    // and back again
    let in_tool = map_from_tool.inverse() * target;
    println!("target back in tool frame: {in_tool:?}");

    // an orientation that looks back along the ray from the tool to the target
    let facing_tool = orientation_from_direction(&(target - map_from_tool.origin()));
    println!("looking back at the tool: {}", facing_tool.rpy());
}
