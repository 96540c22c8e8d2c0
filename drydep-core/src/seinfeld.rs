//! Kinetic-theory resistance model
//!
//! # What This Module Does
//!
//! Deposition velocities following Seinfeld & Pandis (2006) chapter 19:
//!
//! - Gases: $v_d = (R_a + R_b + R_c)^{-1}$ with the surface resistance $R_c$
//!   taken from the Wesely (1989) network
//! - Particles: $v_d = v_s + (R_a + R_b + R_a R_b v_s)^{-1}$ with the
//!   quasi-laminar resistance of Zhang et al. (2001)
//!
//! Particle properties (viscosity, slip, settling, Brownian diffusivity) come
//! from [`crate::particle`].

use crate::categories::{LandUse, Season};
use crate::constants::{GRAVITY, VON_KARMAN, ZERO_CELSIUS};
use crate::particle;
use crate::wesely::{surface_resistance, GasProperty, SpeciesClass, SurfaceWetness};
use crate::zhang::ZhangLandUse;
use crate::FloatValue;

/// Molecular diffusivity of water vapour in air
/// unit: m^2/s
pub const WATER_VAPOUR_DIFFUSIVITY: FloatValue = 2.5e-5;

/// Empirical constant $\epsilon_0$ of the Zhang et al. (2001) surface resistance
const ZHANG_EPSILON: FloatValue = 3.0;

/// Aerodynamic resistance between height `z` and the surface (s/m)
///
/// Seinfeld & Pandis (2006) eqs. 19.13-19.15. An Obukhov length of exactly
/// zero is treated as neutral:
///
/// - neutral: $\ln(z/z_0)$
/// - stable ($L > 0$): $\ln(z/z_0) + 4.7 (z - z_0)/L$
/// - unstable ($L < 0$): $\ln(z/z_0) + \ln\left[\frac{(\eta_0^2+1)(\eta_0+1)^2}{(\eta_r^2+1)(\eta_r+1)^2}\right] + 2(\tan^{-1}\eta_r - \tan^{-1}\eta_0)$
///   with $\eta = (1 - 15 z/L)^{1/4}$
///
/// each divided by $\kappa u_*$.
pub fn aerodynamic_resistance(
    z: FloatValue,
    roughness_length: FloatValue,
    friction_velocity: FloatValue,
    obukhov_length: FloatValue,
) -> FloatValue {
    let z0 = roughness_length;
    let log_term = (z / z0).ln();
    let profile = if obukhov_length == 0.0 {
        log_term
    } else if obukhov_length > 0.0 {
        log_term + 4.7 * (z - z0) / obukhov_length
    } else {
        let eta_0 = (1.0 - 15.0 * z0 / obukhov_length).powf(0.25);
        let eta_r = (1.0 - 15.0 * z / obukhov_length).powf(0.25);
        log_term
            + ((eta_0.powi(2) + 1.0) * (eta_0 + 1.0).powi(2)
                / ((eta_r.powi(2) + 1.0) * (eta_r + 1.0).powi(2)))
            .ln()
            + 2.0 * (eta_r.atan() - eta_0.atan())
    };
    profile / (VON_KARMAN * friction_velocity)
}

/// Molecular diffusivity of a gas from its diffusivity ratio to water vapour
pub fn gas_diffusivity(diffusivity_ratio: FloatValue) -> FloatValue {
    WATER_VAPOUR_DIFFUSIVITY / diffusivity_ratio
}

/// Quasi-laminar resistance for gases, $R_b = 5 Sc^{2/3} / u_*$
pub fn gas_quasi_laminar_resistance(
    kinematic_viscosity: FloatValue,
    diffusivity: FloatValue,
    friction_velocity: FloatValue,
) -> FloatValue {
    let schmidt = kinematic_viscosity / diffusivity;
    5.0 * schmidt.powf(2.0 / 3.0) / friction_velocity
}

/// Quasi-laminar (surface) resistance for particles (s/m)
///
/// Zhang et al. (2001):
///
/// $$R_s = \frac{1}{\epsilon_0 u_* (E_B + E_{IM} + E_{IN}) R_1}$$
///
/// with $E_B = Sc^{-\gamma}$, $E_{IM} = (St/(\alpha + St))^2$,
/// $E_{IN} = \frac{1}{2}(D_p/A)^2$ and $R_1 = \exp(-\sqrt{St})$.
/// The Stokes number is $v_s u_* / (g A)$ over vegetation and
/// $v_s u_*^2 / \nu$ over smooth surfaces, which have no interception.
#[allow(clippy::too_many_arguments)]
pub fn particle_surface_resistance(
    diameter: FloatValue,
    settling_velocity: FloatValue,
    brownian_diffusivity: FloatValue,
    kinematic_viscosity: FloatValue,
    friction_velocity: FloatValue,
    season: Season,
    land_use: ZhangLandUse,
) -> FloatValue {
    let collector = land_use.collector();
    let schmidt = kinematic_viscosity / brownian_diffusivity;
    let brownian = schmidt.powf(-collector.gamma);

    let (stokes, interception) = match land_use.collector_radius(season) {
        Some(radius) => (
            settling_velocity * friction_velocity / (GRAVITY * radius),
            0.5 * (diameter / radius).powi(2),
        ),
        None => (
            settling_velocity * friction_velocity.powi(2) / kinematic_viscosity,
            0.0,
        ),
    };
    let impaction = (stokes / (collector.alpha + stokes)).powi(2);
    let rebound = (-stokes.sqrt()).exp();

    1.0 / (ZHANG_EPSILON * friction_velocity * (brownian + impaction + interception) * rebound)
}

/// Dry deposition velocity of a gas (m/s)
///
/// # Arguments
///
/// * `z` - Reference height (m)
/// * `roughness_length` - Surface roughness length (m)
/// * `friction_velocity` - Friction velocity (m/s)
/// * `obukhov_length` - Monin-Obukhov length (m)
/// * `temperature` - Surface air temperature (K)
/// * `air_density` - Air density (kg/m^3)
/// * `solar_radiation` - Incoming solar radiation (W/m^2)
/// * `slope` - Terrain slope (radians)
#[allow(clippy::too_many_arguments)]
pub fn dry_dep_gas(
    z: FloatValue,
    roughness_length: FloatValue,
    friction_velocity: FloatValue,
    obukhov_length: FloatValue,
    temperature: FloatValue,
    air_density: FloatValue,
    solar_radiation: FloatValue,
    slope: FloatValue,
    gas: &GasProperty,
    season: Season,
    land_use: LandUse,
    wetness: SurfaceWetness,
    class: SpeciesClass,
) -> FloatValue {
    let ra = aerodynamic_resistance(z, roughness_length, friction_velocity, obukhov_length);
    let nu = particle::dynamic_viscosity(temperature) / air_density;
    let rb = gas_quasi_laminar_resistance(
        nu,
        gas_diffusivity(gas.diffusivity_ratio),
        friction_velocity,
    );
    let rc = surface_resistance(
        gas,
        solar_radiation,
        temperature - ZERO_CELSIUS,
        slope,
        season,
        land_use,
        wetness,
        class,
    );
    1.0 / (ra + rb + rc)
}

/// Dry deposition velocity of a particle (m/s)
///
/// Pressure is in Pa, diameter in metres.
#[allow(clippy::too_many_arguments)]
pub fn dry_dep_particle(
    z: FloatValue,
    roughness_length: FloatValue,
    friction_velocity: FloatValue,
    obukhov_length: FloatValue,
    diameter: FloatValue,
    temperature: FloatValue,
    pressure: FloatValue,
    particle_density: FloatValue,
    air_density: FloatValue,
    season: Season,
    land_use: ZhangLandUse,
) -> FloatValue {
    let mu = particle::dynamic_viscosity(temperature);
    let slip = particle::slip_correction(diameter, particle::mean_free_path(temperature, pressure));
    let vs = particle::settling_velocity(diameter, particle_density, slip, mu);
    let diffusivity = particle::brownian_diffusivity(diameter, temperature, slip, mu);

    let ra = aerodynamic_resistance(z, roughness_length, friction_velocity, obukhov_length);
    let rb = particle_surface_resistance(
        diameter,
        vs,
        diffusivity,
        mu / air_density,
        friction_velocity,
        season,
        land_use,
    );
    vs + 1.0 / (ra + rb + ra * rb * vs)
}
