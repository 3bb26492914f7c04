/*
    Orbital Compute, techno-economic projections of compute in orbit
    Copyright (C) 2024 Christopher Rabotin <christopher.rabotin@gmail.com>

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Affero General Public License for more details.

    You should have received a copy of the GNU Affero General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use approx::assert_relative_eq;
use orbital_compute::satellite::{size_satellite, size_satellite_with, Binding, MassClosure};
use orbital_compute::{Params, Shell};
use rstest::rstest;

#[test]
fn leo_2026_reference_design() {
    crate::init_logger();
    let sat = size_satellite(2026, &Params::default(), Shell::Leo);
    assert!(sat.is_valid());
    assert_eq!(sat.binding, Binding::Power);
    assert_relative_eq!(sat.power_kw, 100.0);
    assert_relative_eq!(sat.dry_mass_kg, 1969.6, max_relative = 1e-3);
    assert_relative_eq!(sat.lcoc, 16.17, max_relative = 1e-3);
    assert!(sat.closure.converged);
}

#[rstest]
#[case(2028)]
#[case(2030)]
#[case(2032)]
fn compute_mass_decoupled_from_learning(#[case] year: i32) {
    let slow = size_satellite(year, &Params::builder().ai_learn(0.15).build(), Shell::Leo);
    let fast = size_satellite(year, &Params::builder().ai_learn(0.20).build(), Shell::Leo);
    assert_eq!(slow.binding, Binding::Power);
    assert_eq!(fast.binding, Binding::Power);
    assert_eq!(slow.power_kw, fast.power_kw);
    assert_eq!(slow.mass.compute, fast.mass.compute);
    assert!(fast.tflops > slow.tflops);
    assert!(fast.lcoc < slow.lcoc);
}

#[rstest]
#[case(Shell::Leo, 2026)]
#[case(Shell::Meo, 2035)]
#[case(Shell::Geo, 2040)]
#[case(Shell::Cislunar, 2055)]
fn sizing_is_idempotent(#[case] shell: Shell, #[case] year: i32) {
    let params = Params::default();
    let first = size_satellite(year, &params, shell);
    let second = size_satellite(year, &params, shell);
    assert_eq!(first, second);
    assert_eq!(first.lcoc.to_bits(), second.lcoc.to_bits());
}

#[test]
fn heavy_radiators_collapse_the_design() {
    crate::init_logger();
    let params = Params::builder().radiator_mass_frac(1e-4).build();
    let sat = size_satellite(2026, &params, Shell::Leo);
    assert_eq!(sat.binding, Binding::Thermal);
    assert!(!sat.is_valid());
    assert!(sat.compute_kw < 1.0);
}

#[test]
fn bandwidth_hungry_tokens_bind_comms() {
    let params = Params::builder().bytes_per_token(2e5).build();
    let sat = size_satellite(2026, &params, Shell::Leo);
    assert_eq!(sat.binding, Binding::Comms);
}

#[test]
fn solver_budget_is_explicit() {
    let params = Params::default();
    let single = MassClosure::builder().max_iterations(1).build();
    let sat = size_satellite_with(2026, &params, Shell::Leo, &single);
    assert!(sat.closure.iterations <= 1);
    let full = size_satellite_with(2026, &params, Shell::Leo, &MassClosure::default());
    assert!(full.closure.converged);
}
