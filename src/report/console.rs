//! Plain-text report writers.

use std::io::{self, Write};

use crate::analysis::{CaptureEffort, SortKey};
use crate::classify::ALL_TIERS;
use crate::universe::{Faction, SolarSystem, Warzone};
use crate::warfare::{FwSystem, WarzoneStatus};

fn distance_label(distance: Option<u32>) -> String {
    match distance {
        Some(d) => d.to_string(),
        None => "-".to_string(),
    }
}

/// Control, contest and tier counts for one warzone, then faction
/// statistics and any skipped records.
pub fn write_warzone_summary<W: Write>(out: &mut W, status: &WarzoneStatus<'_>) -> io::Result<()> {
    writeln!(out, "=== {} ===", status.warzone.name().to_uppercase())?;
    writeln!(out, "Total systems: {}", status.total_systems)?;
    for tally in &status.tallies {
        writeln!(
            out,
            "  {:<20} owns {:>3} ({:>5.1}%)  occupies {:>3}  contested {:>3}",
            tally.faction.name(),
            tally.owned,
            tally.control_percent,
            tally.occupied,
            tally.contested
        )?;
    }
    writeln!(out, "Contested systems: {}", status.contested)?;
    match status.leader {
        Some(leader) => writeln!(out, "Leading faction: {}", leader.name())?,
        None => writeln!(out, "Leading faction: none (no majority)")?,
    }

    writeln!(out, "Adjacency:")?;
    for tier in ALL_TIERS {
        writeln!(out, "  {:<20} {:>3}", tier.label(), status.tiers.get(tier))?;
    }

    if !status.faction_stats.is_empty() {
        writeln!(out, "Faction statistics:")?;
        for stats in &status.faction_stats {
            writeln!(out, "  {}", stats.faction.name())?;
            writeln!(out, "    Pilots:                     {}", stats.pilots)?;
            writeln!(out, "    Systems controlled:         {}", stats.systems_controlled)?;
            writeln!(out, "    Kills (yesterday/week):     {} / {}", stats.kills.yesterday, stats.kills.last_week)?;
            if let Some(last_hour) = stats.kills.last_hour {
                writeln!(out, "    Kills (last hour):          {last_hour}")?;
            }
            writeln!(
                out,
                "    Victory points (yesterday): {}",
                stats.victory_points.yesterday
            )?;
        }
    }

    if !status.skipped.is_empty() {
        writeln!(out, "Skipped records: {}", status.skipped.len())?;
        for skipped in &status.skipped {
            writeln!(out, "  {} ({}): {}", skipped.name, skipped.system, skipped.reason)?;
        }
    }
    Ok(())
}

/// One row per system, in the order given.
pub fn write_systems_table<W: Write>(
    out: &mut W,
    systems: &[FwSystem<'_>],
    sort_by: SortKey,
) -> io::Result<()> {
    writeln!(out, "Systems (sorted by {sort_by}):")?;
    writeln!(
        out,
        "{:<16} {:>5} {:>9} {:<20} {:<20} {:>8} {:<20} {:<11}",
        "System", "Sec", "Region", "Owner", "Occupier", "Contest", "Adjacency", "Status"
    )?;
    writeln!(out, "{}", "-".repeat(128))?;
    for s in systems {
        writeln!(
            out,
            "{:<16} {:>5.2} {:>9} {:<20} {:<20} {:>7.1}% {:<20} {:<11}",
            s.name(),
            s.system.security_status,
            s.system.region_id.0,
            s.owner.name(),
            s.occupier.name(),
            s.contest_percent,
            s.tier.label(),
            s.status.label()
        )?;
    }
    Ok(())
}

/// Everything known about a single system.
pub fn write_system_details<W: Write>(out: &mut W, system: &FwSystem<'_>) -> io::Result<()> {
    let static_info = system.system;
    writeln!(out, "=== {} ===", static_info.name.to_uppercase())?;
    writeln!(out, "Warzone:        {}", system.warzone.name())?;
    writeln!(out, "Region:         {}", static_info.region_id.0)?;
    writeln!(
        out,
        "Security:       {:.2} ({})",
        static_info.security_status,
        static_info.security_class().label()
    )?;
    writeln!(out, "Owner:          {}", system.owner.name())?;
    writeln!(out, "Occupier:       {}", system.occupier.name())?;
    writeln!(out, "Status:         {}", system.status.label())?;
    writeln!(
        out,
        "Victory points: {} / {} ({:.1}%)",
        system.victory_points, system.victory_points_threshold, system.contest_percent
    )?;
    writeln!(out, "Adjacency:      {}", system.tier.label())?;
    writeln!(out, "                {}", system.tier.description())?;
    writeln!(out, "Front distance: {}", distance_label(system.front_distance))?;
    if let Some(attacker) = system.attacker() {
        writeln!(
            out,
            "Advantage:      {} {:.2}, {} {:.2} (net {:+.2} for the attacker)",
            system.owner.name(),
            system.advantage_of(system.owner),
            attacker.name(),
            system.advantage_of(attacker),
            system.net_advantage
        )?;
    }
    Ok(())
}

/// Capture effort table, easiest first.
pub fn write_capture_effort<W: Write>(
    out: &mut W,
    warzone: Warzone,
    attacker: Faction,
    staging: &SolarSystem,
    efforts: &[CaptureEffort<'_>],
) -> io::Result<()> {
    writeln!(
        out,
        "=== CAPTURE EFFORT: {} in the {} from {} ===",
        attacker.name(),
        warzone.name(),
        staging.name
    )?;
    if efforts.is_empty() {
        writeln!(out, "No enemy-held systems.")?;
        return Ok(());
    }
    writeln!(
        out,
        "{:<16} {:>6} {:<10} {:>5} {:<20} {:>8}",
        "System", "Score", "Effort", "Jumps", "Adjacency", "Contest"
    )?;
    writeln!(out, "{}", "-".repeat(72))?;
    for effort in efforts {
        writeln!(
            out,
            "{:<16} {:>6.1} {:<10} {:>5} {:<20} {:>7.1}%",
            effort.system.name,
            effort.score,
            effort.category.label(),
            distance_label(effort.jumps),
            effort.tier.label(),
            effort.contest_percent
        )?;
    }
    Ok(())
}
