use crate::scene::{NodeKey, SceneGraph, Transform};

/// Selects one of the six animatable scalar channels of a [`Transform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    RotationX,
    RotationY,
    RotationZ,
    PositionX,
    PositionY,
    PositionZ,
}

impl Channel {
    /// Reads the channel's current value.
    #[must_use]
    pub fn get(self, transform: &Transform) -> f32 {
        match self {
            Channel::RotationX => transform.rotation.x,
            Channel::RotationY => transform.rotation.y,
            Channel::RotationZ => transform.rotation.z,
            Channel::PositionX => transform.position.x,
            Channel::PositionY => transform.position.y,
            Channel::PositionZ => transform.position.z,
        }
    }

    /// Writes the channel's value.
    pub fn set(self, transform: &mut Transform, value: f32) {
        match self {
            Channel::RotationX => transform.rotation.x = value,
            Channel::RotationY => transform.rotation.y = value,
            Channel::RotationZ => transform.rotation.z = value,
            Channel::PositionX => transform.position.x = value,
            Channel::PositionY => transform.position.y = value,
            Channel::PositionZ => transform.position.z = value,
        }
    }
}

/// Animates one scalar channel of one node linearly over a fixed number of
/// logical frames.
///
/// The start value is sampled exactly once, at creation, and never re-sampled.
/// On the final frame the channel is snapped to the exact target value rather
/// than the interpolated one, so terminal states carry no floating-point
/// residue. Completion is reported exactly once; advancing a finished tween is
/// a no-op.
#[derive(Debug, Clone)]
pub struct Tween {
    node: NodeKey,
    channel: Channel,
    start: f32,
    target: f32,
    duration: u32,
    elapsed: u32,
}

impl Tween {
    /// Creates a tween from the node's current channel value toward `target`
    /// over `duration` frames.
    ///
    /// # Panics
    ///
    /// Panics if `duration` is zero — a zero-frame tween indicates a
    /// choreography bookkeeping bug, not a runtime condition.
    #[must_use]
    pub fn start(
        graph: &SceneGraph,
        node: NodeKey,
        channel: Channel,
        target: f32,
        duration: u32,
    ) -> Self {
        assert!(duration >= 1, "tween duration must be at least one frame");
        let start = graph
            .get_node(node)
            .map_or(target, |n| channel.get(&n.transform));
        Self {
            node,
            channel,
            start,
            target,
            duration,
            elapsed: 0,
        }
    }

    /// Advances the tween by one logical frame, writing the interpolated
    /// value into the node's channel.
    ///
    /// Returns `true` on the frame the tween completes — exactly once over
    /// its lifetime. Further calls leave the node untouched and return
    /// `false`.
    pub fn advance(&mut self, graph: &mut SceneGraph) -> bool {
        if self.elapsed >= self.duration {
            return false;
        }
        self.elapsed += 1;

        let Some(node) = graph.get_node_mut(self.node) else {
            log::error!("tween target node disappeared mid-flight");
            self.elapsed = self.duration;
            return true;
        };

        if self.elapsed == self.duration {
            // Exact snap, not the interpolated value.
            self.channel.set(&mut node.transform, self.target);
            return true;
        }

        let t = self.elapsed as f32 / self.duration as f32;
        let value = self.start + (self.target - self.start) * t;
        self.channel.set(&mut node.transform, value);
        false
    }

    /// True once the tween has reached its target.
    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    #[inline]
    #[must_use]
    pub fn channel(&self) -> Channel {
        self.channel
    }

    #[inline]
    #[must_use]
    pub fn node(&self) -> NodeKey {
        self.node
    }
}
