use crate::animation::{Channel, JoinBarrier, Tween};
use crate::choreography::faces::Face;
use crate::choreography::poses::{self, DEFAULT_PHASE_FRAMES, Pose};
use crate::scene::{Node, NodeKey, SceneGraph};

/// Which barrier a live tween reports its completion to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lane {
    /// Counts toward the phase's terminal barrier.
    Terminal,
    /// Counts toward the gate that releases the unfold's dependent phase.
    Gate,
}

#[derive(Debug)]
struct LiveTween {
    tween: Tween,
    lane: Lane,
}

/// Choreography phase, advanced by barrier firings.
///
/// Makes the sequential dependency between tween groups an explicit state
/// transition instead of nested completion callbacks.
#[derive(Debug)]
enum Phase {
    Idle,
    /// Fold: the four side faces close in parallel.
    FoldSides { barrier: JoinBarrier },
    /// Fold: the top face swings down onto the closed box.
    FoldTop { barrier: JoinBarrier },
    /// Unfold: sides open against `terminal` while the back face's single
    /// hinge tween runs against `gate`; the gate firing releases the top
    /// face's tweens, which join `terminal`.
    Unfold {
        terminal: JoinBarrier,
        gate: Option<JoinBarrier>,
    },
}

/// The fold/unfold state machine.
///
/// Owns the six pivot handles and all in-flight tweens. An external driver
/// calls [`FoldController::tick`] once per displayed frame; requests arrive
/// through [`FoldController::activate`] and are silently ignored while a
/// choreography is in flight — the controller keeps exclusive write access to
/// the pivot transforms until it settles.
pub struct FoldController {
    faces: [NodeKey; 6],
    phase: Phase,
    is_unfolded: bool,
    phase_frames: u32,
    tweens: Vec<LiveTween>,
}

impl FoldController {
    /// Builds the six-face rig in the folded configuration and returns a
    /// controller in the idle, folded state.
    ///
    /// Topology: bottom, front, back and top hang off the world root; left
    /// and right are carried by the bottom face.
    pub fn new(graph: &mut SceneGraph) -> Self {
        let mut faces = [NodeKey::default(); 6];
        for face in [Face::Bottom, Face::Front, Face::Back, Face::Top] {
            faces[face.index()] = graph.add_node(Self::make_node(face));
        }
        for face in [Face::Left, Face::Right] {
            faces[face.index()] =
                graph.add_to_parent(Self::make_node(face), faces[Face::Bottom.index()]);
        }

        Self {
            faces,
            phase: Phase::Idle,
            is_unfolded: false,
            phase_frames: DEFAULT_PHASE_FRAMES,
            tweens: Vec::new(),
        }
    }

    /// Overrides the per-phase duration in frames.
    ///
    /// # Panics
    ///
    /// Panics if `frames` is zero.
    #[must_use]
    pub fn with_phase_frames(mut self, frames: u32) -> Self {
        assert!(frames >= 1, "phase duration must be at least one frame");
        self.phase_frames = frames;
        self
    }

    fn make_node(face: Face) -> Node {
        let mut node = Node::new(face.name());
        let pose = poses::folded(face);
        node.transform.rotation = pose.rotation;
        node.transform.position = pose.position;
        node
    }

    /// Toggles between folding and unfolding based on the last settled state.
    /// Ignored while a choreography is in flight.
    pub fn activate(&mut self, graph: &mut SceneGraph) {
        if self.is_unfolded {
            self.fold_all(graph);
        } else {
            self.unfold_all(graph);
        }
    }

    /// Starts the fold choreography. Ignored while one is already running.
    pub fn fold_all(&mut self, graph: &mut SceneGraph) {
        if self.is_animating() {
            log::debug!("fold request ignored: choreography in flight");
            return;
        }

        log::info!("fold: closing the four side faces");
        for face in Face::SIDES {
            self.spawn_pose(graph, face, poses::folded(face), Lane::Terminal);
        }
        // Four faces, six channels each.
        self.phase = Phase::FoldSides {
            barrier: JoinBarrier::new(4 * 6),
        };
    }

    /// Starts the unfold choreography. Ignored while one is already running.
    pub fn unfold_all(&mut self, graph: &mut SceneGraph) {
        if self.is_animating() {
            log::debug!("unfold request ignored: choreography in flight");
            return;
        }

        log::info!("unfold: opening side faces, swinging the back face");

        // Unanimated pre-phase: reset the approach start values and make the
        // top a child of the back before any tween launches, so animating the
        // back's hinge carries the top through the same arc.
        for face in poses::UNFOLD_SNAP {
            self.snap(graph, face, poses::folded(face));
        }
        let top = self.key(Face::Top);
        let back = self.key(Face::Back);
        if graph.get_node(top).and_then(Node::parent) != Some(back) {
            self.reattach(graph, Face::Top, Face::Back);
        }

        for face in [Face::Front, Face::Left, Face::Right] {
            self.spawn_pose(graph, face, poses::unfolded_side(face), Lane::Terminal);
        }
        self.spawn(
            graph,
            Face::Back,
            Channel::RotationX,
            poses::BACK_OPEN_ROT_X,
            Lane::Gate,
        );

        // The terminal barrier spans both parallel groups: 18 side channels
        // now plus the top's 6 once the gate opens. The back's hinge tween
        // gates the top's start instead of counting here.
        self.phase = Phase::Unfold {
            terminal: JoinBarrier::new(3 * 6 + 6),
            gate: Some(JoinBarrier::new(1)),
        };
    }

    /// Advances every live tween by one logical frame and performs any phase
    /// transition whose barrier fired within this tick.
    pub fn tick(&mut self, graph: &mut SceneGraph) {
        if matches!(self.phase, Phase::Idle) {
            return;
        }

        let mut terminal_done = 0u32;
        let mut gate_done = 0u32;
        for live in &mut self.tweens {
            if live.tween.advance(graph) {
                match live.lane {
                    Lane::Terminal => terminal_done += 1,
                    Lane::Gate => gate_done += 1,
                }
            }
        }
        self.tweens.retain(|live| !live.tween.is_finished());

        // Take the phase out so transitions can spawn tweens without fighting
        // the borrow of the barrier they are reacting to.
        let phase = std::mem::replace(&mut self.phase, Phase::Idle);
        self.phase = match phase {
            Phase::Idle => Phase::Idle,

            Phase::FoldSides { mut barrier } => {
                debug_assert_eq!(gate_done, 0);
                if drain(&mut barrier, terminal_done) {
                    // Sides are closed; fold the top down onto the box.
                    self.spawn(
                        graph,
                        Face::Top,
                        Channel::RotationX,
                        poses::TOP_FOLD_ROT_X,
                        Lane::Terminal,
                    );
                    Phase::FoldTop {
                        barrier: JoinBarrier::new(1),
                    }
                } else {
                    Phase::FoldSides { barrier }
                }
            }

            Phase::FoldTop { mut barrier } => {
                debug_assert_eq!(gate_done, 0);
                if drain(&mut barrier, terminal_done) {
                    self.finish_fold(graph);
                    Phase::Idle
                } else {
                    Phase::FoldTop { barrier }
                }
            }

            Phase::Unfold {
                mut terminal,
                mut gate,
            } => {
                if gate_done > 0 {
                    let fired = gate.as_mut().is_some_and(|g| drain(g, gate_done));
                    assert!(fired, "gate signal after the gate barrier fired");
                    gate = None;
                    // The back face is fully open; peel the top face, carried
                    // by the back, onto its outer surface.
                    self.spawn_pose(graph, Face::Top, poses::TOP_REST, Lane::Terminal);
                }

                if drain(&mut terminal, terminal_done) {
                    debug_assert!(gate.is_none());
                    self.is_unfolded = true;
                    log::info!("unfold settled");
                    Phase::Idle
                } else {
                    Phase::Unfold { terminal, gate }
                }
            }
        };
    }

    /// Terminal fold transition: restore the top's independence and snap it
    /// to the exact closed values.
    fn finish_fold(&mut self, graph: &mut SceneGraph) {
        let top = self.key(Face::Top);
        // While unfolded the top is carried by the back face; once folded it
        // must be an independent sibling again so the bottom's own rotation
        // does not also drag it.
        if graph.get_node(top).and_then(Node::parent).is_some() {
            graph.detach_to_root(top);
        }
        self.snap(graph, Face::Top, poses::folded(Face::Top));
        self.is_unfolded = false;
        log::info!("fold settled");
    }

    // === status ===

    /// True while any phase of a choreography is in flight.
    #[inline]
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// The last settled stable state. Updated only at the terminal moment of
    /// a completed choreography, never mid-sequence.
    #[inline]
    #[must_use]
    pub fn is_unfolded(&self) -> bool {
        self.is_unfolded
    }

    /// Handle of a face's pivot node.
    #[inline]
    #[must_use]
    pub fn node(&self, face: Face) -> NodeKey {
        self.faces[face.index()]
    }

    /// Number of tweens currently in flight.
    #[must_use]
    pub fn live_tweens(&self) -> usize {
        self.tweens.len()
    }

    #[must_use]
    pub fn phase_frames(&self) -> u32 {
        self.phase_frames
    }

    // === helpers ===

    #[inline]
    fn key(&self, face: Face) -> NodeKey {
        self.faces[face.index()]
    }

    /// Sets a face's rotation and position directly, without animation.
    fn snap(&self, graph: &mut SceneGraph, face: Face, pose: Pose) {
        if let Some(node) = graph.get_node_mut(self.key(face)) {
            node.transform.rotation = pose.rotation;
            node.transform.position = pose.position;
        }
    }

    fn reattach(&self, graph: &mut SceneGraph, child: Face, parent: Face) {
        if let Err(err) = graph.attach(self.key(child), self.key(parent)) {
            // The six rig nodes are created once and never removed.
            log::error!(
                "reparent {} under {} failed: {err}",
                child.name(),
                parent.name()
            );
        }
    }

    fn spawn(
        &mut self,
        graph: &SceneGraph,
        face: Face,
        channel: Channel,
        target: f32,
        lane: Lane,
    ) {
        let tween = Tween::start(graph, self.key(face), channel, target, self.phase_frames);
        self.tweens.push(LiveTween { tween, lane });
    }

    /// Launches the full six-channel tween group driving a face toward a pose.
    fn spawn_pose(&mut self, graph: &SceneGraph, face: Face, pose: Pose, lane: Lane) {
        self.spawn(graph, face, Channel::RotationX, pose.rotation.x, lane);
        self.spawn(graph, face, Channel::RotationY, pose.rotation.y, lane);
        self.spawn(graph, face, Channel::RotationZ, pose.rotation.z, lane);
        self.spawn(graph, face, Channel::PositionX, pose.position.x, lane);
        self.spawn(graph, face, Channel::PositionY, pose.position.y, lane);
        self.spawn(graph, face, Channel::PositionZ, pose.position.z, lane);
    }
}

/// Routes `count` completion signals into a barrier, reporting whether it
/// fired within this batch.
fn drain(barrier: &mut JoinBarrier, count: u32) -> bool {
    let mut fired = false;
    for _ in 0..count {
        fired |= barrier.signal_one();
    }
    fired
}
