use anyhow::Context;
use appworld_engine::coords::{Size, Vec2};
use appworld_engine::logging::{init_logging, LoggingConfig};
use appworld_engine::scene::{BaseNode, SceneGraph, SceneNode, UserNode};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let mut graph = SceneGraph::new();
    let root = graph.root();

    // ── WORLD ─────────────────────────────────────────────────────────────
    let world = graph.spawn_child(root, BaseNode::new().named("world").at(Vec2::new(160.0, 120.0)))?;

    let player = graph.spawn_child(
        world,
        UserNode::with_size(Size::new(100.0, 50.0)).named("player").z(1.0),
    )?;
    graph.spawn_child(
        world,
        UserNode::with_size(Size::new(60.0, 60.0))
            .named("friend")
            .at(Vec2::new(-90.0, 20.0)),
    )?;
    let away = graph.spawn_child(
        world,
        UserNode::with_size(Size::new(40.0, 40.0))
            .named("away")
            .at(Vec2::new(200.0, 0.0)),
    )?;
    graph
        .get_mut(away)
        .context("away node vanished")?
        .set_hidden(true);

    // ── HUD ───────────────────────────────────────────────────────────────
    graph.spawn_child(root, BaseNode::new().named("hud").z(100.0))?;

    println!();
    println!("  AppWorld scene ({} nodes)", graph.node_count());
    println!();
    for line in graph.describe(root).lines() {
        println!("    {line}");
    }
    println!();

    // ── QUERIES ───────────────────────────────────────────────────────────
    let player_node = graph
        .get_as::<UserNode>(player)
        .context("player is not a UserNode")?;
    log::info!("player size: {:?}", player_node.size());
    log::info!("player scene position: {:?}", graph.scene_position(player)?);
    log::info!("world accumulated frame: {:?}", graph.accumulated_frame(world)?);

    for item in graph.paint_order() {
        let name = graph.get(item.id).and_then(|n| n.name()).unwrap_or("-");
        log::info!("paint {name:<8} z {:>6} frame {:?}", item.key.z.get(), item.frame);
    }

    let probe = Vec2::new(160.0, 120.0);
    let hits: Vec<&str> = graph
        .nodes_at_point(probe)
        .into_iter()
        .filter_map(|id| graph.get(id).and_then(|n| n.name()))
        .collect();
    log::info!("nodes at {probe:?}: {hits:?}");

    let local = graph.convert_point(probe, root, player)?;
    log::info!("{probe:?} in player space: {local:?}");

    let removed = graph.despawn(world)?;
    log::info!("despawned world ({removed} nodes), {} left", graph.node_count());

    Ok(())
}
