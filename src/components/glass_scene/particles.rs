//! Pool of independently wandering particles with their trails.

use glam::DVec3;
use log::debug;
use rand::rngs::StdRng;

use super::entropy::{Entropy, RngEntropy};
use super::particle::{Particle, TickOutcome};
use super::path::{MotionParams, PathGenerator};
use super::trail::Trail;

/// Start delays are drawn uniformly from `[0, MAX_START_DELAY)` seconds.
pub const MAX_START_DELAY: f64 = 3.0;

/// Default number of trail samples kept per particle.
pub const DEFAULT_TRAIL_SAMPLES: usize = 48;

/// Per-frame view of one particle for the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSnapshot {
	/// Current location.
	pub position: DVec3,
	/// Changes whenever the particle respawns; drop trail history when it does.
	pub trail_generation: u32,
	/// False while the particle waits out its start delay.
	pub visible: bool,
}

/// Owns every particle in the scene.
///
/// Particles never interact; each tick updates them one after another with
/// the shared random source.
pub struct ParticleSystem<E: Entropy = RngEntropy<StdRng>> {
	particles: Vec<Particle>,
	trails: Vec<Trail>,
	generator: PathGenerator,
	entropy: E,
	elapsed: f64,
}

impl ParticleSystem {
	/// `count` particles with default motion, seeded from the platform.
	pub fn with_count(count: usize) -> Self {
		Self::new(
			count,
			MotionParams::default(),
			DEFAULT_TRAIL_SAMPLES,
			RngEntropy::from_entropy(),
		)
	}
}

impl<E: Entropy> ParticleSystem<E> {
	/// `count` particles anchored at the origin, each with an independent start delay.
	pub fn new(count: usize, params: MotionParams, trail_samples: usize, mut entropy: E) -> Self {
		let generator = PathGenerator::new(params);
		let particles: Vec<Particle> = (0..count)
			.map(|_| {
				let delay = entropy.unit() * MAX_START_DELAY;
				Particle::spawn(DVec3::ZERO, delay, &generator, &mut entropy)
			})
			.collect();
		let trails = (0..count).map(|_| Trail::new(trail_samples)).collect();

		debug!("particle system created with {} particles", count);

		Self {
			particles,
			trails,
			generator,
			entropy,
			elapsed: 0.0,
		}
	}

	/// Advance every particle by `dt` seconds.
	///
	/// `elapsed_total` is the host clock and only recorded for display.
	pub fn tick(&mut self, elapsed_total: f64, dt: f64) {
		self.elapsed = elapsed_total;

		for (i, (particle, trail)) in self
			.particles
			.iter_mut()
			.zip(self.trails.iter_mut())
			.enumerate()
		{
			let outcome = particle.tick(dt, &self.generator, &mut self.entropy);
			if outcome == TickOutcome::Respawned {
				debug!(
					"particle {} respawned, generation {}",
					i,
					particle.trail_generation()
				);
			}
			if particle.is_visible() && outcome != TickOutcome::Idle {
				trail.record(particle.position(), particle.trail_generation());
			}
		}
	}

	/// Position, trail generation and visibility of every particle.
	pub fn snapshots(&self) -> impl Iterator<Item = ParticleSnapshot> + '_ {
		self.particles.iter().map(|p| ParticleSnapshot {
			position: p.position(),
			trail_generation: p.trail_generation(),
			visible: p.is_visible(),
		})
	}

	/// Particles in creation order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Trails, index-aligned with [`ParticleSystem::particles`].
	pub fn trails(&self) -> &[Trail] {
		&self.trails
	}

	/// Motion numbers shared by every particle.
	pub fn params(&self) -> &MotionParams {
		self.generator.params()
	}

	/// Number of particles.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// True when the system was created with no particles.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	/// Host clock passed to the last [`ParticleSystem::tick`].
	pub fn elapsed(&self) -> f64 {
		self.elapsed
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::glass_scene::entropy::Scripted;

	fn seeded(count: usize, seed: u64) -> ParticleSystem<RngEntropy<StdRng>> {
		ParticleSystem::new(
			count,
			MotionParams::default(),
			DEFAULT_TRAIL_SAMPLES,
			RngEntropy::seeded(seed),
		)
	}

	#[test]
	fn creates_requested_particles() {
		let system = seeded(4, 11);
		assert_eq!(system.len(), 4);
		for p in system.particles() {
			assert!((0.0..MAX_START_DELAY).contains(&p.delay()));
			assert_eq!(p.start(), DVec3::ZERO);
			assert!(!p.is_visible());
		}
	}

	#[test]
	fn platform_seeded_system() {
		let mut system = ParticleSystem::with_count(5);
		assert_eq!(system.len(), 5);
		assert_eq!(system.params(), &MotionParams::default());
		system.tick(3.0, 3.0);
		assert!(system.snapshots().all(|s| s.visible));
	}

	#[test]
	fn empty_system_ticks() {
		let mut system = seeded(0, 1);
		assert!(system.is_empty());
		system.tick(1.0, 1.0);
		assert_eq!(system.snapshots().count(), 0);
	}

	#[test]
	fn everyone_visible_after_three_seconds() {
		let mut system = seeded(4, 2024);
		let dt = 1.0 / 64.0;
		let mut elapsed = 0.0;
		for _ in 0..192 {
			elapsed += dt;
			system.tick(elapsed, dt);
		}
		assert_eq!(elapsed, 3.0);
		assert!(system.snapshots().all(|s| s.visible));
		assert_eq!(system.elapsed(), 3.0);
	}

	#[test]
	fn delays_are_independent() {
		// Unit draws: delay, turn order for each particle in sequence.
		let entropy = Scripted::new(&[0, 1, 2], &[0.1, 0.9, 0.5, 0.2]);
		let system = ParticleSystem::new(2, MotionParams::default(), 8, entropy);
		let delays: Vec<f64> = system.particles().iter().map(|p| p.delay()).collect();
		assert!((delays[0] - 0.3).abs() < 1e-12);
		assert!((delays[1] - 1.5).abs() < 1e-12);
	}

	#[test]
	fn trails_follow_visible_particles() {
		let mut system = seeded(3, 8);
		let dt = 1.0 / 60.0;
		for frame in 1..=600 {
			system.tick(frame as f64 * dt, dt);
		}
		for (snapshot, trail) in system.snapshots().zip(system.trails()) {
			assert!(snapshot.visible);
			assert!(!trail.is_empty());
			assert_eq!(trail.generation(), snapshot.trail_generation);
			let head = trail.attenuated().last().map(|(p, _)| p);
			assert_eq!(head, Some(snapshot.position));
		}
	}

	#[test]
	fn particles_eventually_respawn() {
		let mut system = seeded(2, 31);
		let dt = 1.0 / 30.0;
		// Longest lap is 3s delay + (28 + 100) / 4 s of travel.
		for frame in 1..=30 * 40 {
			system.tick(frame as f64 * dt, dt);
		}
		assert!(system.snapshots().all(|s| s.trail_generation >= 1));
	}

	#[test]
	fn idle_ticks_do_not_record() {
		let mut system = seeded(1, 4);
		system.tick(5.0, 5.0);
		let before = system.trails()[0].len();
		system.tick(5.0, 0.0);
		assert_eq!(system.trails()[0].len(), before);
	}
}
