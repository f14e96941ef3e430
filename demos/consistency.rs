use pyrmap::check::{check_round_trip, cross_validate, samples, CheckOptions, ConsistencyReport};
use pyrmap::shapes::{curved_pyramid, linear_pyramid, warped_pyramid};
use pyrmap::traits::Geometry;

fn main() {
    // The non-planar and the planar pyramid, both straight-sided
    let geometries = [
        warped_pyramid::<f64>().unwrap(),
        linear_pyramid::<f64>().unwrap(),
    ];
    let xi = [-0.125, -0.125, 0.125];

    for geometry in &geometries {
        // Map a reference point to physical space, back to reference space, and forward again
        println!("\nConsistency check, mapping point from physical to local and back to physical:");
        let result = check_round_trip(geometry, &xi, 1e-12).unwrap();
        println!("{result}");

        // Compare the element map with the map given by its monomial coefficients
        println!("\nCross-validation of the forward map at {xi:?}:");
        println!("{}", cross_validate(geometry, &xi));
    }

    // Run both checks over a grid of samples on the curved pyramid
    let geometry = curved_pyramid::<f64>().unwrap();
    let options = CheckOptions::for_geometry_type(geometry.geometry_type());
    let samples = samples::interior_grid(3, 0.9).unwrap();
    let report = ConsistencyReport::run(&geometry, &samples, &options).unwrap();
    println!(
        "\nCurved pyramid: {} samples, max error {:e}, max discrepancy {:e}, consistent: {}",
        report.len(),
        report.max_round_trip_distance(),
        report.max_discrepancy(),
        report.is_consistent()
    );
}
