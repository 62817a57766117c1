use crate::body::Body;
use crate::error::CollisionResult;
use crate::response::CollisionResponse;
use crate::sat::test_shapes;
use geometry::{Rectangle, Vector};
use log::{debug, trace};
use quadtree::QuadTree;

/// Anything the world can move and collide.
pub trait Collidable {
    fn body(&self) -> &Body;

    fn body_mut(&mut self) -> &mut Body;

    fn bounds(&self) -> Rectangle {
        self.body().world_bounds()
    }

    /// Called once per colliding shape pair, with `response` seen from this
    /// object's side. When this object is the one being checked, returning
    /// false skips the default positional response. The other object of the
    /// pair is only notified and never moved.
    fn on_collision(&mut self, _response: &CollisionResponse, _other: &Self) -> bool {
        true
    }
}

impl Collidable for Body {
    fn body(&self) -> &Body {
        self
    }

    fn body_mut(&mut self) -> &mut Body {
        self
    }
}

#[derive(Debug, Clone)]
pub struct WorldConfig {
    pub quadtree: quadtree::Config,
    pub gravity: Vector,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            quadtree: quadtree::Config::default(),
            gravity: Vector::new(0.0, 0.98),
        }
    }
}

/// Owns the collidable objects and drives broadphase plus narrowphase each
/// step. Objects are addressed by the `u32` handle returned from [`World::add`],
/// which is also the value stored in the quadtree.
pub struct World<T: Collidable> {
    objects: Vec<Option<T>>,
    free_handles: Vec<u32>,
    quadtree: QuadTree,
    response: CollisionResponse,
    candidates: Vec<u32>,
    gravity: Vector,
}

impl<T: Collidable> World<T> {
    pub fn new(bounds: Rectangle, config: WorldConfig) -> CollisionResult<Self> {
        Ok(World {
            objects: Vec::new(),
            free_handles: Vec::new(),
            quadtree: QuadTree::new_with_config(bounds, config.quadtree)?,
            response: CollisionResponse::new(),
            candidates: Vec::new(),
            gravity: config.gravity,
        })
    }

    pub fn add(&mut self, object: T) -> u32 {
        match self.free_handles.pop() {
            Some(handle) => {
                self.objects[handle as usize] = Some(object);
                handle
            }
            None => {
                self.objects.push(Some(object));
                (self.objects.len() - 1) as u32
            }
        }
    }

    pub fn remove(&mut self, handle: u32) -> Option<T> {
        let object = self.objects.get_mut(handle as usize)?.take()?;
        self.quadtree.remove(handle);
        self.free_handles.push(handle);
        Some(object)
    }

    pub fn get(&self, handle: u32) -> Option<&T> {
        self.objects.get(handle as usize)?.as_ref()
    }

    pub fn get_mut(&mut self, handle: u32) -> Option<&mut T> {
        self.objects.get_mut(handle as usize)?.as_mut()
    }

    pub fn len(&self) -> usize {
        self.objects.len() - self.free_handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &T)> {
        self.objects
            .iter()
            .enumerate()
            .filter_map(|(handle, object)| Some((handle as u32, object.as_ref()?)))
    }

    pub fn gravity(&self) -> Vector {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vector) {
        self.gravity = gravity;
    }

    pub fn bounds(&self) -> Rectangle {
        self.quadtree.bounds()
    }

    /// Re-bounds the broadphase, e.g. when a new level is loaded.
    pub fn set_bounds(&mut self, bounds: Rectangle) -> CollisionResult<()> {
        self.quadtree.clear(Some(bounds))?;
        self.insert_all();
        Ok(())
    }

    pub fn quadtree(&self) -> &QuadTree {
        &self.quadtree
    }

    /// Clears the quadtree and reinserts every object at its current bounds.
    pub fn rebuild(&mut self) -> CollisionResult<()> {
        self.quadtree.clear(None)?;
        self.insert_all();
        Ok(())
    }

    fn insert_all(&mut self) {
        for (handle, object) in self.objects.iter().enumerate() {
            if let Some(object) = object {
                self.quadtree.insert(handle as u32, object.bounds());
            }
        }
    }

    /// Integrates every body, rebuilds the broadphase, then resolves
    /// collisions for every non-static object. Returns how many collided.
    pub fn step(&mut self, dt: f32) -> CollisionResult<usize> {
        let gravity = self.gravity;
        for object in self.objects.iter_mut().flatten() {
            object.body_mut().update(dt, &gravity);
        }
        self.rebuild()?;

        let mut collided = 0;
        for handle in 0..self.objects.len() as u32 {
            let is_dynamic = self
                .get(handle)
                .map_or(false, |object| !object.body().is_static());
            if is_dynamic && self.check(handle) {
                collided += 1;
            }
        }
        debug!(
            "world step: {} objects, {} collided, {} quadtree nodes",
            self.len(),
            collided,
            self.quadtree.node_count()
        );
        Ok(collided)
    }

    /// Tests `handle` against every broadphase candidate, moving it out of
    /// each overlap and notifying both sides. Returns whether anything collided.
    pub fn check(&mut self, handle: u32) -> bool {
        let bounds = match self.get(handle) {
            Some(object) if !object.body().shapes().is_empty() => object.bounds(),
            _ => return false,
        };

        let mut candidates = std::mem::take(&mut self.candidates);
        candidates.clear();
        self.quadtree.retrieve(&bounds, &mut candidates);

        let mut collided = false;
        for &other in &candidates {
            if other == handle {
                continue;
            }
            let Some((a, b)) = pair_mut(&mut self.objects, handle as usize, other as usize) else {
                continue;
            };
            if b.body().shapes().is_empty() || !a.body().should_collide(b.body()) {
                continue;
            }
            // A may already have been pushed by an earlier candidate.
            if !a.bounds().overlaps(&b.bounds()) {
                continue;
            }
            if collide_pair(a, b, handle, other, &mut self.response) {
                collided = true;
            }
        }

        self.candidates = candidates;
        collided
    }
}

// Runs every shape pair of `a` against `b`, corrects `a` and notifies both.
fn collide_pair<T: Collidable>(
    a: &mut T,
    b: &mut T,
    handle_a: u32,
    handle_b: u32,
    response: &mut CollisionResponse,
) -> bool {
    let mut collided = false;
    let shape_count_a = a.body().shapes().len();
    let shape_count_b = b.body().shapes().len();

    for i in 0..shape_count_a {
        for j in 0..shape_count_b {
            response.clear();
            let hit = {
                let (body_a, body_b) = (a.body(), b.body());
                let (Some(shape_a), Some(shape_b)) = (body_a.shape(i), body_b.shape(j)) else {
                    continue;
                };
                test_shapes(&body_a.position, shape_a, &body_b.position, shape_b, response)
            };
            if !hit {
                continue;
            }
            collided = true;
            response.a = Some(handle_a);
            response.b = Some(handle_b);
            response.shape_index_a = Some(i);
            response.shape_index_b = Some(j);
            trace!(
                "collision {} -> {}: overlap {} along {:?}",
                handle_a,
                handle_b,
                response.overlap,
                response.overlap_normal
            );

            if a.on_collision(response, &*b) {
                a.body_mut().respond_to_collision(response);
            }
            // A has been moved out of the overlap, so B is only notified.
            response.flip();
            b.on_collision(response, &*a);
        }
    }
    collided
}

fn pair_mut<T>(objects: &mut [Option<T>], a: usize, b: usize) -> Option<(&mut T, &mut T)> {
    if a == b || a >= objects.len() || b >= objects.len() {
        return None;
    }
    if a < b {
        let (head, tail) = objects.split_at_mut(b);
        Some((head[a].as_mut()?, tail[0].as_mut()?))
    } else {
        let (head, tail) = objects.split_at_mut(a);
        Some((tail[0].as_mut()?, head[b].as_mut()?))
    }
}
