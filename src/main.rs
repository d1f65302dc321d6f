// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::io::{self, BufRead, Write};
use std::time::Instant;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use prodkit::analysis::detect_key;
use prodkit::arrangement::Arrangement;
use prodkit::generators::progression;
use prodkit::lyrics;
use prodkit::mixing;
use prodkit::music::{Chord, ChordQuality, Note, Pitch, ScaleType};
use prodkit::timing::{SessionState, TapSession};
use prodkit::vocal;

fn print_usage() {
    println!("PRODKIT - Music Production Toolkit");
    println!();
    println!("Usage: prodkit [COMMAND]");
    println!();
    println!("Commands:");
    println!("  --detect-key <NOTE>...       Detect key from notes (e.g. C E G)");
    println!("  --chord <ROOT> <QUALITY>     Show chord tones (e.g. C maj7)");
    println!("  --progression <KEY> <SCALE>  Generate a chord progression");
    println!("  --tap                        Tap tempo (press Enter on the beat, q to quit)");
    println!("  --vocal-range <LOW> <HIGH>   Classify a vocal range (e.g. C3 C5)");
    println!("  --rhymes <WORD>              Look up rhymes for a word");
    println!("  --structure <TEMPLATE>       Show a song structure template");
    println!("                               (Pop Standard, EDM Drop, Hip-Hop)");
    println!("  --eq [HZ]                    Show the EQ frequency chart, or the band for HZ");
    println!("  --help                       Show this help message");
}

fn detect_key_command(args: &[String]) -> Result<()> {
    let notes = args
        .iter()
        .map(|s| Note::parse(s))
        .collect::<Result<Vec<_>, _>>()?;

    let m = detect_key(&notes)?;
    println!("Detected key: {} {} ({} of {} notes matched)", m.root, m.scale_type, m.score, notes.len());
    println!("Scale notes:");
    for note in m.scale().notes() {
        print!("  {}", note);
    }
    println!();
    Ok(())
}

fn chord_command(root: &str, quality: &str) -> Result<()> {
    let root = Note::parse(root)?;
    let quality = ChordQuality::parse(quality)?;
    let chord = Chord::build(root, quality);

    println!("{}", chord);
    let names: Vec<String> = chord.notes().iter().map(|n| n.to_string()).collect();
    println!("Notes: {}", names.join(" - "));
    Ok(())
}

fn progression_command(key: &str, scale: &str) -> Result<()> {
    let key = Note::parse(key)?;
    let mode = ScaleType::parse(scale)?;
    let mut rng = StdRng::from_entropy();

    let picked = progression::pick(mode, &mut rng)?;
    println!("{}", progression::render(key, mode, picked));
    Ok(())
}

fn tap_command() -> Result<()> {
    let mut session = TapSession::new();
    let start = Instant::now();

    println!("Tap tempo: press Enter on the beat, q + Enter to quit.");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim() == "q" {
            break;
        }

        let now_ms = start.elapsed().as_millis() as u64;
        session.tick(now_ms);
        if session.state() == SessionState::Idle {
            println!("(paused - starting fresh)");
        }
        session.tap(now_ms);

        match session.bpm() {
            Some(bpm) => print!("{} BPM ({} taps)  ", bpm, session.tap_count()),
            None => print!("keep tapping...  "),
        }
        io::stdout().flush()?;
        println!();
    }

    if let Some(bpm) = session.bpm() {
        println!("Final: {} BPM", bpm);
    }
    Ok(())
}

fn vocal_range_command(low: &str, high: &str) -> Result<()> {
    let lowest = Pitch::parse(low)?;
    let highest = Pitch::parse(high)?;
    let profile = vocal::classify(lowest, highest)?;

    println!("Range: {} - {} ({} semitones)", profile.lowest, profile.highest, profile.semitones);
    println!("Voice type: {} ({})", profile.voice_type, profile.voice_type.description());

    let songs = profile.voice_type.suggested_songs();
    if !songs.is_empty() {
        println!("Songs in your range:");
        for song in songs {
            println!("  {}", song);
        }
    }
    Ok(())
}

fn rhymes_command(word: &str) -> Result<()> {
    let rhymes = lyrics::lookup(word)?;
    println!("Perfect rhymes for \"{}\":", rhymes.word);
    println!("  {}", rhymes.perfect.join(", "));
    println!("Near rhymes:");
    println!("  {}", rhymes.near.join(", "));
    Ok(())
}

fn structure_command(template: &str) -> Result<()> {
    let arr = Arrangement::from_template(template)?;
    print!("{}", arr);
    println!("At 120 BPM: about {:.0} seconds", arr.duration_secs(120.0));
    Ok(())
}

fn eq_command(hz: Option<&str>) -> Result<()> {
    match hz {
        Some(raw) => {
            let hz: u32 = raw
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid frequency: {}", raw))?;
            match mixing::band_for(hz) {
                Some(band) => {
                    println!("{} Hz is in {} ({}-{} Hz)", hz, band.name, band.low_hz, band.high_hz);
                    println!("{}", band.description);
                    println!("Typical sources: {}", band.instruments.join(", "));
                }
                None => println!("{} Hz is outside the audible mixing range (20 Hz - 20 kHz)", hz),
            }
        }
        None => {
            for band in mixing::BANDS {
                println!("{:<10} {:>6}-{} Hz  {}", band.name, band.low_hz, band.high_hz, band.description);
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("PRODKIT - Music Production Toolkit");
        println!("Run with --help for usage information");
        return Ok(());
    }

    info!(command = %args[1], "running");

    match args[1].as_str() {
        "--detect-key" => {
            if args.len() < 3 {
                eprintln!("Error: --detect-key requires note names (e.g. C E G)");
                std::process::exit(1);
            }
            detect_key_command(&args[2..])?;
        }
        "--chord" => {
            if args.len() < 4 {
                eprintln!("Error: --chord requires a root and quality (e.g. C maj7)");
                std::process::exit(1);
            }
            chord_command(&args[2], &args[3])?;
        }
        "--progression" => {
            if args.len() < 4 {
                eprintln!("Error: --progression requires a key and scale (e.g. C major)");
                std::process::exit(1);
            }
            progression_command(&args[2], &args[3])?;
        }
        "--tap" => {
            tap_command()?;
        }
        "--vocal-range" => {
            if args.len() < 4 {
                eprintln!("Error: --vocal-range requires lowest and highest notes (e.g. C3 C5)");
                std::process::exit(1);
            }
            vocal_range_command(&args[2], &args[3])?;
        }
        "--rhymes" => {
            if args.len() < 3 {
                eprintln!("Error: --rhymes requires a word");
                std::process::exit(1);
            }
            rhymes_command(&args[2])?;
        }
        "--structure" => {
            if args.len() < 3 {
                eprintln!("Error: --structure requires a template name");
                eprintln!("Available: {}", Arrangement::template_names().join(", "));
                std::process::exit(1);
            }
            structure_command(&args[2])?;
        }
        "--eq" => {
            eq_command(args.get(2).map(String::as_str))?;
        }
        "--help" => {
            print_usage();
        }
        unknown => {
            eprintln!("Error: unknown command {}", unknown);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
