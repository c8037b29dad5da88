use rand_core::RngCore;

pub const PARTICLE_COUNT: usize = 150;
pub const MAX_CONNECTIONS: usize = PARTICLE_COUNT * 6;
pub const CONNECTION_DISTANCE: f32 = 1.6;
const SPREAD: [f32; 3] = [14.0, 8.0, 4.0];
const DRIFT: [f32; 3] = [0.005, 0.005, 0.002];
const PULL_BACK: f32 = 0.002;
const POINTER_RADIUS: f32 = 3.0;
const POINTER_STRENGTH: f32 = 0.025;
const BOUND_X: f32 = 8.0;
const BOUND_Y: f32 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: [f32; 3],
    base: [f32; 3],
    velocity: [f32; 3],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub from: [f32; 3],
    pub to: [f32; 3],
    /// 1 at zero distance, fading to 0 at [`CONNECTION_DISTANCE`].
    pub alpha: f32,
}

/// Drifting point cloud behind the landing hero.
#[derive(Clone, Debug)]
pub struct NeuralMesh {
    particles: Vec<Particle>,
}

impl NeuralMesh {
    pub fn new(rng: &mut dyn RngCore) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| {
                let position = [0, 1, 2].map(|axis| centered(&mut *rng) * SPREAD[axis]);
                let velocity = [0, 1, 2].map(|axis| centered(&mut *rng) * DRIFT[axis]);
                Particle {
                    position,
                    base: position,
                    velocity,
                }
            })
            .collect();
        Self { particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advance one frame. `pointer` is in world units, see [`pointer_to_world`].
    pub fn step(&mut self, pointer: Option<(f32, f32)>) {
        for particle in &mut self.particles {
            for axis in 0..3 {
                particle.position[axis] += particle.velocity[axis];
                particle.position[axis] +=
                    (particle.base[axis] - particle.position[axis]) * PULL_BACK;
            }

            if let Some((px, py)) = pointer {
                let dx = px - particle.position[0];
                let dy = py - particle.position[1];
                let dist_sq = dx * dx + dy * dy;
                if dist_sq < POINTER_RADIUS * POINTER_RADIUS {
                    let force = (1.0 - dist_sq.sqrt() / POINTER_RADIUS) * POINTER_STRENGTH;
                    particle.position[0] += dx * force;
                    particle.position[1] += dy * force;
                }
            }

            if particle.position[0].abs() > BOUND_X {
                particle.velocity[0] = -particle.velocity[0];
            }
            if particle.position[1].abs() > BOUND_Y {
                particle.velocity[1] = -particle.velocity[1];
            }
        }
    }

    pub fn connections(&self) -> Vec<Connection> {
        let mut out = Vec::new();
        let limit = CONNECTION_DISTANCE * CONNECTION_DISTANCE;
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let dist_sq: f32 = (0..3)
                    .map(|axis| (a.position[axis] - b.position[axis]).powi(2))
                    .sum();
                if dist_sq < limit {
                    out.push(Connection {
                        from: a.position,
                        to: b.position,
                        alpha: 1.0 - dist_sq.sqrt() / CONNECTION_DISTANCE,
                    });
                    if out.len() >= MAX_CONNECTIONS {
                        return out;
                    }
                }
            }
        }
        out
    }
}

/// Map a pointer in normalized device coordinates (-1..1) onto the mesh plane.
pub fn pointer_to_world(ndc_x: f32, ndc_y: f32, viewport_width: f32, viewport_height: f32) -> (f32, f32) {
    (ndc_x * viewport_width / 2.0, ndc_y * viewport_height / 2.0)
}

/// Uniform sample in [-0.5, 0.5).
fn centered(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() >> 8) as f32 / (1u32 << 24) as f32 - 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StepRng(u32);

    impl RngCore for StepRng {
        fn next_u32(&mut self) -> u32 {
            self.0 = self.0.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            self.0
        }

        fn next_u64(&mut self) -> u64 {
            u64::from(self.next_u32())
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            rand_core::impls::fill_bytes_via_next(self, dest)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    fn single(position: [f32; 3]) -> NeuralMesh {
        NeuralMesh {
            particles: vec![Particle {
                position,
                base: position,
                velocity: [0.0; 3],
            }],
        }
    }

    #[test]
    fn particles_start_inside_the_box() {
        let mesh = NeuralMesh::new(&mut StepRng(7));
        assert_eq!(mesh.particles().len(), PARTICLE_COUNT);
        for particle in mesh.particles() {
            assert!(particle.position[0].abs() <= 7.0);
            assert!(particle.position[1].abs() <= 4.0);
            assert!(particle.position[2].abs() <= 2.0);
            assert!(particle.velocity[2].abs() <= 0.001);
        }
    }

    #[test]
    fn pointer_pulls_nearby_particles() {
        let mut mesh = single([1.0, 0.0, 0.0]);
        mesh.step(Some((0.0, 0.0)));
        let x = mesh.particles()[0].position[0];
        assert!(x < 1.0);
        let expected = 1.0 - (1.0 - 1.0 / 3.0) * 0.025;
        assert!((x - expected).abs() < 1e-5);
    }

    #[test]
    fn distant_pointer_is_ignored() {
        let mut mesh = single([5.0, 0.0, 0.0]);
        mesh.step(Some((0.0, 0.0)));
        assert_eq!(mesh.particles()[0].position, [5.0, 0.0, 0.0]);
    }

    #[test]
    fn velocity_reflects_past_bounds() {
        let mut mesh = single([8.5, 0.0, 0.0]);
        mesh.particles[0].velocity = [0.01, 0.0, 0.0];
        mesh.step(None);
        assert!(mesh.particles()[0].velocity[0] < 0.0);
    }

    #[test]
    fn connection_alpha_fades_with_distance() {
        let mut mesh = single([0.0, 0.0, 0.0]);
        mesh.particles.push(Particle {
            position: [0.8, 0.0, 0.0],
            base: [0.8, 0.0, 0.0],
            velocity: [0.0; 3],
        });
        mesh.particles.push(Particle {
            position: [5.0, 0.0, 0.0],
            base: [5.0, 0.0, 0.0],
            velocity: [0.0; 3],
        });
        let links = mesh.connections();
        assert_eq!(links.len(), 1);
        assert!((links[0].alpha - 0.5).abs() < 1e-6);
    }

    #[test]
    fn connections_are_capped() {
        let mesh = NeuralMesh {
            particles: vec![single([0.0; 3]).particles[0]; PARTICLE_COUNT],
        };
        assert_eq!(mesh.connections().len(), MAX_CONNECTIONS);
    }

    #[test]
    fn pointer_maps_to_viewport_half_extents() {
        assert_eq!(pointer_to_world(1.0, -1.0, 14.0, 8.0), (7.0, -4.0));
    }
}
