use super::config::{ConfigError, Environment};
use super::constants::{FRICTION_JITTER, MIN_TRAIL_SIZE, SPRING_JITTER};
use super::surface::Surface;
use glam::DVec2;
use rand::Rng;

/// Point-mass in screen pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Node {
    pub pos: DVec2,
    pub vel: DVec2,
}

impl Node {
    pub fn at(pos: DVec2) -> Self {
        Self {
            pos,
            vel: DVec2::ZERO,
        }
    }
}

/// Chain of spring-coupled nodes lagging behind a target.
#[derive(Clone, Debug)]
pub struct Trail {
    spring: f64,
    friction: f64,
    nodes: Vec<Node>,
}

impl Trail {
    /// Trail with exact constants, every node resting at `origin`.
    pub fn new(
        spring: f64,
        friction: f64,
        size: usize,
        origin: DVec2,
    ) -> Result<Self, ConfigError> {
        if size < MIN_TRAIL_SIZE {
            return Err(ConfigError::TrailTooShort { size });
        }
        Ok(Self {
            spring,
            friction,
            nodes: vec![Node::at(origin); size],
        })
    }

    /// Trail whose spring and friction are jittered so neighbours drift apart.
    pub fn jittered<R: Rng + ?Sized>(
        base_spring: f64,
        env: &Environment,
        origin: DVec2,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let spring = base_spring + rng.gen_range(-SPRING_JITTER..SPRING_JITTER);
        let friction = env.friction + rng.gen_range(-FRICTION_JITTER..FRICTION_JITTER);
        Self::new(spring, friction, env.size, origin)
    }

    #[inline]
    pub fn spring(&self) -> f64 {
        self.spring
    }

    #[inline]
    pub fn friction(&self) -> f64 {
        self.friction
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn head(&self) -> &Node {
        &self.nodes[0]
    }

    /// Advance the chain one frame toward `target`.
    ///
    /// The head is pulled by the trail spring; node `i` is pulled toward its
    /// predecessor with `spring * tension^i` and inherits `dampening` of its
    /// velocity. Every node reads its predecessor as it was when the frame
    /// started.
    pub fn update(&mut self, target: DVec2, env: &Environment) {
        let mut spring = self.spring;
        let mut prev: Option<Node> = None;
        for node in &mut self.nodes {
            let before = *node;
            match prev {
                None => node.vel += (target - node.pos) * spring,
                Some(p) => {
                    node.vel += (p.pos - node.pos) * spring;
                    node.vel += p.vel * env.dampening;
                }
            }
            node.vel *= self.friction;
            node.pos += node.vel;
            spring *= env.tension;
            prev = Some(before);
        }
    }

    /// Stroke a smooth path through the nodes, using each interior node as a
    /// control point and the midpoint to its successor as the segment end.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let n = self.nodes.len();
        let head = self.nodes[0].pos;
        surface.begin_path();
        surface.move_to(head.x, head.y);
        for i in 1..n - 2 {
            let (node, next) = (self.nodes[i].pos, self.nodes[i + 1].pos);
            let mid = (node + next) * 0.5;
            surface.quadratic_curve_to(node.x, node.y, mid.x, mid.y);
        }
        let (node, last) = (self.nodes[n - 2].pos, self.nodes[n - 1].pos);
        surface.quadratic_curve_to(node.x, node.y, last.x, last.y);
        surface.stroke();
        surface.close_path();
    }
}
