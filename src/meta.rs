//! Program-related constants.

use crate::i18n::Msg;

pub const PROGRAM_NAME: &str = "MyPaint";

/// Shown when the running application does not report its own version.
pub const FALLBACK_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const WEBSITE_URI: &str = "http://mypaint.org";

pub const COPYRIGHT: Msg = Msg::new(
    "About dialog: copyright statement",
    "Copyright (C) 2005-2017\n\
     Martin Renold and the MyPaint Development Team",
);

pub const LICENSE_SUMMARY: Msg = Msg::new(
    "About dialog: license summary",
    "This program is free software; you can redistribute it and/or modify \
     it under the terms of the GNU General Public License as published by \
     the Free Software Foundation; either version 2 of the License, or \
     (at your option) any later version.\n\
     \n\
     This program is distributed in the hope that it will be useful, \
     but WITHOUT ANY WARRANTY. See the COPYING file for more details.",
);
