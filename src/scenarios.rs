/*
    The two fixture runs. Each prints a few banner lines around the JSON so whoever is pasting
    payloads into the play_notes tool knows what to listen for.
 */

use std::io::Write;
use std::path::Path;

use log::info;

use crate::emitter;
use crate::error::FixtureError;
use crate::fixtures;

pub fn direct_drums<W: Write>(out: &mut W, target: &Path) -> Result<(), FixtureError> {
    let sequence = fixtures::direct_drums();
    sequence.validate()?;

    writeln!(out, "🧪 Testing direct drum synthesis types (no presets)")?;
    writeln!(out, "This should now produce proper drum sounds, not sine waves!")?;

    // The file is in place before anything claims it was created
    emitter::write_fixture(target, &sequence)?;

    writeln!(out, "✅ Test configuration created. Test data:")?;
    emitter::print_fixture(out, &sequence)?;

    info!("Direct drums fixture available at {}", target.display());
    Ok(())
}

pub fn consolidated_drums<W: Write>(out: &mut W) -> Result<(), FixtureError> {
    let basic = fixtures::consolidated_drums();
    let with_effects = fixtures::drums_with_effects();
    basic.validate()?;
    with_effects.validate()?;

    writeln!(out, "🎛️ Testing CONSOLIDATED PLAYBACK SYSTEM")?;
    writeln!(out, "✅ Now ALL sequences use play_enhanced_mixed() with full 6-effect support!")?;
    writeln!(out)?;

    writeln!(out, "📋 Test 1: Basic drum synthesis (should sound like drums, not sine waves)")?;
    emitter::print_fixture(out, &basic)?;
    writeln!(out)?;

    writeln!(out, "📋 Test 2: Drums with professional effects (should work with all 14 presets)")?;
    emitter::print_fixture(out, &with_effects)?;
    writeln!(out)?;

    writeln!(out, "🔧 Next: Start MCP server and test these sequences through the play_notes tool")?;
    writeln!(out, "🎯 Expected: Both tests use 'enhanced mixed playback' with proper drum sounds + effects")?;

    Ok(())
}
