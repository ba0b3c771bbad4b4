use desk_calculator::{constants, format, geometry, si, stats, thermo, vector};

#[test]
fn constants_table_is_reachable_from_the_facade() {
    let c = constants::lookup("c").expect("speed of light");
    assert_eq!(c.value, constants::SPEED_OF_LIGHT);
    assert_eq!(c.unit, "m/s");
    assert!(constants::CONSTANTS.len() >= 20);
}

#[test]
fn a_worked_problem_across_crates() {
    // Photon energy at 500 nm, in eV, shown in engineering notation.
    let wavelength_m = si::from_prefix(500.0, si::Prefix::Nano);
    let energy_ev = constants::PLANCK * constants::SPEED_OF_LIGHT / wavelength_m
        / constants::ELECTRON_VOLT;
    assert!((energy_ev - 2.478).abs() < 0.01, "energy = {energy_ev}");
    assert_eq!(format::eng(energy_ev * 1e3, 3), "2.48e+03");
}

#[test]
fn temperature_and_statistics() {
    let readings_f = [98.6, 99.1, 97.9];
    let readings_c: Vec<f64> = readings_f
        .iter()
        .map(|f| thermo::temp_fc(*f).expect("above absolute zero"))
        .collect();
    let mean_c = stats::mean(&readings_c).unwrap();
    assert!((mean_c - 37.0).abs() < 0.2, "mean = {mean_c}");
    assert!(stats::pct_rsd(&readings_c).unwrap() < 2.0);
}

#[test]
fn geometry_and_vectors_agree() {
    let a = vector::to_3d(&[3.0, 0.0]);
    let b = vector::to_3d(&[0.0, 4.0]);
    let hyp = vector::norm(&vector::sub(&a, &b));
    assert!((hyp - 5.0).abs() < 1e-12);
    assert!((geometry::pythleg(hyp, 3.0).unwrap() - 4.0).abs() < 1e-12);
    assert_eq!(format::mixed(hyp / 2.0).unwrap(), "2 1/2");
}

#[test]
fn version_is_exposed() {
    assert!(!desk_calculator::version().is_empty());
}
