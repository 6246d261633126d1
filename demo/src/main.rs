use std::{f64::consts::FRAC_PI_2, process::ExitCode};
use rotation::{euler_to_quaternion, quaternion_to_euler, EulerAngles, RotationError};

/// Converts the given angles to a quaternion and back again, printing every step.
/// 
fn round_trip(input: EulerAngles, print_quaternion: bool) -> Result<(), RotationError> {
    let q = euler_to_quaternion(&input);
    let output = quaternion_to_euler(&q)?;

    println!("Input (deg) : {:.2?}", input.to_degrees());
    if print_quaternion {
        println!("Quaternion  : {:.4?}", q.to_array());
    }
    println!("Output (deg): {:.2?}", output.to_degrees());
    Ok(())
}

fn main() -> ExitCode {
    // Gimbal lock warnings are logged, show them unless RUST_LOG says otherwise.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("--- Case 1: Standard Rotation ---");
    if let Err(err) = round_trip(EulerAngles::new(0.5, 0.5, 0.5), true) {
        log::error!("Standard rotation failed: {}", err);
        return ExitCode::FAILURE;
    }

    println!();
    println!("--- Case 2: Gimbal Lock (Pitch = 90°) ---");
    if let Err(err) = round_trip(EulerAngles::new(0.0, FRAC_PI_2, 0.0), false) {
        log::error!("Gimbal lock rotation failed: {}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
