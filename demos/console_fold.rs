//! Headless stand-in for the render loop: builds the cube rig, toggles the
//! choreography twice (unfold, then fold back) and ticks the controller to
//! completion, printing each face's world position at every settle.
//!
//! Run with `RUST_LOG=info cargo run --example console_fold` to see the
//! controller's phase transitions.

use cubefold::{Face, FoldController, SceneGraph};

fn main() {
    env_logger::init();

    let mut graph = SceneGraph::new();
    let mut controller = FoldController::new(&mut graph);

    println!("initial (folded):");
    print_poses(&mut graph, &controller);

    for _ in 0..2 {
        controller.activate(&mut graph);

        let mut ticks = 0u32;
        while controller.is_animating() {
            controller.tick(&mut graph);
            graph.update_world_matrices();
            ticks += 1;
        }

        println!(
            "\nsettled after {ticks} ticks — {}:",
            if controller.is_unfolded() {
                "unfolded"
            } else {
                "folded"
            }
        );
        print_poses(&mut graph, &controller);
    }
}

fn print_poses(graph: &mut SceneGraph, controller: &FoldController) {
    graph.update_world_matrices();
    for face in Face::ALL {
        let node = graph.get_node(controller.node(face)).expect("rig node");
        let world = node.world_matrix().translation;
        println!(
            "  {:>6}: world ({:+.2}, {:+.2}, {:+.2})",
            face.name(),
            world.x,
            world.y,
            world.z
        );
    }
}
