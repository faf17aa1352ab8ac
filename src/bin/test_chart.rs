use bazi_backend::models::{BirthInfo, Gender};
use bazi_backend::services::bazi::{calculate_ba_zi, validate_birth_info};
use bazi_backend::services::equation_of_time::format_equation_of_time;
use bazi_backend::services::true_solar_time::{format_corrected_time, format_correction_info};
use dotenv::dotenv;
use log::{error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    info!("Testing chart calculation...");

    let birth = BirthInfo {
        gender: Gender::Male,
        year: 1990,
        month: 5,
        day: 15,
        hour: 10,
        minute: 30,
        city: Some("TPE".to_string()),
    };

    if let Err(message) = validate_birth_info(&birth) {
        error!("Invalid birth info: {}", message);
        return Err(message.into());
    }

    let result = calculate_ba_zi(&birth)?;

    info!("Solar date: {}", result.solar_date);
    info!("Lunar date: {}", result.lunar_date);
    info!(
        "四柱: {}{} {}{} {}{} {}{}",
        result.year_pillar.heavenly_stem.glyph(),
        result.year_pillar.earthly_branch.glyph(),
        result.month_pillar.heavenly_stem.glyph(),
        result.month_pillar.earthly_branch.glyph(),
        result.day_pillar.heavenly_stem.glyph(),
        result.day_pillar.earthly_branch.glyph(),
        result.hour_pillar.heavenly_stem.glyph(),
        result.hour_pillar.earthly_branch.glyph(),
    );

    info!("Correction: {}", format_correction_info(&result.true_solar_time));
    info!("Corrected time: {}", format_corrected_time(&result.true_solar_time));
    info!(
        "Equation of time: {}",
        format_equation_of_time(result.true_solar_time.equation_of_time_minutes)
    );

    info!(
        "日主 {} ({})",
        result.day_master.display_name, result.day_master_strength.strength_label
    );
    info!("{}", result.favorable_elements.explanation);

    info!("{} markers:", result.shen_sha.len());
    for marker in &result.shen_sha {
        let positions: Vec<&str> = marker.positions.iter().map(|p| p.name()).collect();
        info!(
            "  {} [{}] {} — {}",
            marker.name,
            marker.shen_sha_type.label(),
            positions.join("、"),
            marker.description
        );
    }

    Ok(())
}
