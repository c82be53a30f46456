// Generated by make_uts46_mapping_table.py. Do not edit.

static TABLE_ROWS: &[TableRow] = &[
    (0x0000, 0x002C, DisallowedStd3Valid, "", Unspecified),
    (0x002D, 0x002E, Valid, "", Unspecified),
    (0x002F, 0x002F, DisallowedStd3Valid, "", Unspecified),
    (0x0030, 0x0039, Valid, "", Unspecified),
    (0x003A, 0x0040, DisallowedStd3Valid, "", Unspecified),
    (0x0041, 0x0041, Mapped, "a", Unspecified),
    (0x0042, 0x0042, Mapped, "b", Unspecified),
    (0x0043, 0x0043, Mapped, "c", Unspecified),
    (0x0044, 0x0044, Mapped, "d", Unspecified),
    (0x0045, 0x0045, Mapped, "e", Unspecified),
    (0x0046, 0x0046, Mapped, "f", Unspecified),
    (0x0047, 0x0047, Mapped, "g", Unspecified),
    (0x0048, 0x0048, Mapped, "h", Unspecified),
    (0x0049, 0x0049, Mapped, "i", Unspecified),
    (0x004A, 0x004A, Mapped, "j", Unspecified),
    (0x004B, 0x004B, Mapped, "k", Unspecified),
    (0x004C, 0x004C, Mapped, "l", Unspecified),
    (0x004D, 0x004D, Mapped, "m", Unspecified),
    (0x004E, 0x004E, Mapped, "n", Unspecified),
    (0x004F, 0x004F, Mapped, "o", Unspecified),
    (0x0050, 0x0050, Mapped, "p", Unspecified),
    (0x0051, 0x0051, Mapped, "q", Unspecified),
    (0x0052, 0x0052, Mapped, "r", Unspecified),
    (0x0053, 0x0053, Mapped, "s", Unspecified),
    (0x0054, 0x0054, Mapped, "t", Unspecified),
    (0x0055, 0x0055, Mapped, "u", Unspecified),
    (0x0056, 0x0056, Mapped, "v", Unspecified),
    (0x0057, 0x0057, Mapped, "w", Unspecified),
    (0x0058, 0x0058, Mapped, "x", Unspecified),
    (0x0059, 0x0059, Mapped, "y", Unspecified),
    (0x005A, 0x005A, Mapped, "z", Unspecified),
    (0x005B, 0x0060, DisallowedStd3Valid, "", Unspecified),
    (0x0061, 0x007A, Valid, "", Unspecified),
    (0x007B, 0x007F, DisallowedStd3Valid, "", Unspecified),
    (0x0080, 0x009F, Disallowed, "", Unspecified),
    (0x00A0, 0x00A0, DisallowedStd3Mapped, " ", Unspecified),
    (0x00A1, 0x00A7, Valid, "", Nv8),
    (0x00A8, 0x00A8, DisallowedStd3Mapped, " \u{308}", Unspecified),
    (0x00A9, 0x00A9, Valid, "", Nv8),
    (0x00AA, 0x00AA, Mapped, "a", Unspecified),
    (0x00AB, 0x00AC, Valid, "", Nv8),
    (0x00AD, 0x00AD, Ignored, "", Unspecified),
    (0x00AE, 0x00AE, Valid, "", Nv8),
    (0x00AF, 0x00AF, DisallowedStd3Mapped, " \u{304}", Unspecified),
    (0x00B0, 0x00B1, Valid, "", Nv8),
    (0x00B2, 0x00B2, Mapped, "2", Unspecified),
    (0x00B3, 0x00B3, Mapped, "3", Unspecified),
    (0x00B4, 0x00B4, DisallowedStd3Mapped, " \u{301}", Unspecified),
    (0x00B5, 0x00B5, Mapped, "\u{3BC}", Unspecified),
    (0x00B6, 0x00B6, Valid, "", Nv8),
    (0x00B7, 0x00B7, Valid, "", Unspecified),
    (0x00B8, 0x00B8, DisallowedStd3Mapped, " \u{327}", Unspecified),
    (0x00B9, 0x00B9, Mapped, "1", Unspecified),
    (0x00BA, 0x00BA, Mapped, "o", Unspecified),
    (0x00BB, 0x00BB, Valid, "", Nv8),
    (0x00BC, 0x00BC, Mapped, "1\u{2044}4", Unspecified),
    (0x00BD, 0x00BD, Mapped, "1\u{2044}2", Unspecified),
    (0x00BE, 0x00BE, Mapped, "3\u{2044}4", Unspecified),
    (0x00BF, 0x00BF, Valid, "", Nv8),
    (0x00C0, 0x00C0, Mapped, "\u{E0}", Unspecified),
    (0x00C1, 0x00C1, Mapped, "\u{E1}", Unspecified),
    (0x00C2, 0x00C2, Mapped, "\u{E2}", Unspecified),
    (0x00C3, 0x00C3, Mapped, "\u{E3}", Unspecified),
    (0x00C4, 0x00C4, Mapped, "\u{E4}", Unspecified),
    (0x00C5, 0x00C5, Mapped, "\u{E5}", Unspecified),
    (0x00C6, 0x00C6, Mapped, "\u{E6}", Unspecified),
    (0x00C7, 0x00C7, Mapped, "\u{E7}", Unspecified),
    (0x00C8, 0x00C8, Mapped, "\u{E8}", Unspecified),
    (0x00C9, 0x00C9, Mapped, "\u{E9}", Unspecified),
    (0x00CA, 0x00CA, Mapped, "\u{EA}", Unspecified),
    (0x00CB, 0x00CB, Mapped, "\u{EB}", Unspecified),
    (0x00CC, 0x00CC, Mapped, "\u{EC}", Unspecified),
    (0x00CD, 0x00CD, Mapped, "\u{ED}", Unspecified),
    (0x00CE, 0x00CE, Mapped, "\u{EE}", Unspecified),
    (0x00CF, 0x00CF, Mapped, "\u{EF}", Unspecified),
    (0x00D0, 0x00D0, Mapped, "\u{F0}", Unspecified),
    (0x00D1, 0x00D1, Mapped, "\u{F1}", Unspecified),
    (0x00D2, 0x00D2, Mapped, "\u{F2}", Unspecified),
    (0x00D3, 0x00D3, Mapped, "\u{F3}", Unspecified),
    (0x00D4, 0x00D4, Mapped, "\u{F4}", Unspecified),
    (0x00D5, 0x00D5, Mapped, "\u{F5}", Unspecified),
    (0x00D6, 0x00D6, Mapped, "\u{F6}", Unspecified),
    (0x00D7, 0x00D7, Valid, "", Nv8),
    (0x00D8, 0x00D8, Mapped, "\u{F8}", Unspecified),
    (0x00D9, 0x00D9, Mapped, "\u{F9}", Unspecified),
    (0x00DA, 0x00DA, Mapped, "\u{FA}", Unspecified),
    (0x00DB, 0x00DB, Mapped, "\u{FB}", Unspecified),
    (0x00DC, 0x00DC, Mapped, "\u{FC}", Unspecified),
    (0x00DD, 0x00DD, Mapped, "\u{FD}", Unspecified),
    (0x00DE, 0x00DE, Mapped, "\u{FE}", Unspecified),
    (0x00DF, 0x00DF, Deviation, "ss", Unspecified),
    (0x00E0, 0x00F6, Valid, "", Unspecified),
    (0x00F7, 0x00F7, Valid, "", Nv8),
    (0x00F8, 0x00FF, Valid, "", Unspecified),
    (0x0100, 0x0100, Mapped, "\u{101}", Unspecified),
    (0x0101, 0x0101, Valid, "", Unspecified),
    (0x0102, 0x0102, Mapped, "\u{103}", Unspecified),
    (0x0103, 0x0103, Valid, "", Unspecified),
    (0x0104, 0x0104, Mapped, "\u{105}", Unspecified),
    (0x0105, 0x0105, Valid, "", Unspecified),
    (0x0106, 0x0106, Mapped, "\u{107}", Unspecified),
    (0x0107, 0x0107, Valid, "", Unspecified),
    (0x0108, 0x0108, Mapped, "\u{109}", Unspecified),
    (0x0109, 0x0109, Valid, "", Unspecified),
    (0x010A, 0x010A, Mapped, "\u{10B}", Unspecified),
    (0x010B, 0x010B, Valid, "", Unspecified),
    (0x010C, 0x010C, Mapped, "\u{10D}", Unspecified),
    (0x010D, 0x010D, Valid, "", Unspecified),
    (0x010E, 0x010E, Mapped, "\u{10F}", Unspecified),
    (0x010F, 0x010F, Valid, "", Unspecified),
    (0x0110, 0x0110, Mapped, "\u{111}", Unspecified),
    (0x0111, 0x0111, Valid, "", Unspecified),
    (0x0112, 0x0112, Mapped, "\u{113}", Unspecified),
    (0x0113, 0x0113, Valid, "", Unspecified),
    (0x0114, 0x0114, Mapped, "\u{115}", Unspecified),
    (0x0115, 0x0115, Valid, "", Unspecified),
    (0x0116, 0x0116, Mapped, "\u{117}", Unspecified),
    (0x0117, 0x0117, Valid, "", Unspecified),
    (0x0118, 0x0118, Mapped, "\u{119}", Unspecified),
    (0x0119, 0x0119, Valid, "", Unspecified),
    (0x011A, 0x011A, Mapped, "\u{11B}", Unspecified),
    (0x011B, 0x011B, Valid, "", Unspecified),
    (0x011C, 0x011C, Mapped, "\u{11D}", Unspecified),
    (0x011D, 0x011D, Valid, "", Unspecified),
    (0x011E, 0x011E, Mapped, "\u{11F}", Unspecified),
    (0x011F, 0x011F, Valid, "", Unspecified),
    (0x0120, 0x0120, Mapped, "\u{121}", Unspecified),
    (0x0121, 0x0121, Valid, "", Unspecified),
    (0x0122, 0x0122, Mapped, "\u{123}", Unspecified),
    (0x0123, 0x0123, Valid, "", Unspecified),
    (0x0124, 0x0124, Mapped, "\u{125}", Unspecified),
    (0x0125, 0x0125, Valid, "", Unspecified),
    (0x0126, 0x0126, Mapped, "\u{127}", Unspecified),
    (0x0127, 0x0127, Valid, "", Unspecified),
    (0x0128, 0x0128, Mapped, "\u{129}", Unspecified),
    (0x0129, 0x0129, Valid, "", Unspecified),
    (0x012A, 0x012A, Mapped, "\u{12B}", Unspecified),
    (0x012B, 0x012B, Valid, "", Unspecified),
    (0x012C, 0x012C, Mapped, "\u{12D}", Unspecified),
    (0x012D, 0x012D, Valid, "", Unspecified),
    (0x012E, 0x012E, Mapped, "\u{12F}", Unspecified),
    (0x012F, 0x012F, Valid, "", Unspecified),
    (0x0130, 0x0130, Mapped, "i\u{307}", Unspecified),
    (0x0131, 0x0131, Valid, "", Unspecified),
    (0x0132, 0x0133, Mapped, "ij", Unspecified),
    (0x0134, 0x0134, Mapped, "\u{135}", Unspecified),
    (0x0135, 0x0135, Valid, "", Unspecified),
    (0x0136, 0x0136, Mapped, "\u{137}", Unspecified),
    (0x0137, 0x0138, Valid, "", Unspecified),
    (0x0139, 0x0139, Mapped, "\u{13A}", Unspecified),
    (0x013A, 0x013A, Valid, "", Unspecified),
    (0x013B, 0x013B, Mapped, "\u{13C}", Unspecified),
    (0x013C, 0x013C, Valid, "", Unspecified),
    (0x013D, 0x013D, Mapped, "\u{13E}", Unspecified),
    (0x013E, 0x013E, Valid, "", Unspecified),
    (0x013F, 0x0140, Mapped, "l\u{B7}", Unspecified),
    (0x0141, 0x0141, Mapped, "\u{142}", Unspecified),
    (0x0142, 0x0142, Valid, "", Unspecified),
    (0x0143, 0x0143, Mapped, "\u{144}", Unspecified),
    (0x0144, 0x0144, Valid, "", Unspecified),
    (0x0145, 0x0145, Mapped, "\u{146}", Unspecified),
    (0x0146, 0x0146, Valid, "", Unspecified),
    (0x0147, 0x0147, Mapped, "\u{148}", Unspecified),
    (0x0148, 0x0148, Valid, "", Unspecified),
    (0x0149, 0x0149, Mapped, "\u{2BC}n", Unspecified),
    (0x014A, 0x014A, Mapped, "\u{14B}", Unspecified),
    (0x014B, 0x014B, Valid, "", Unspecified),
    (0x014C, 0x014C, Mapped, "\u{14D}", Unspecified),
    (0x014D, 0x014D, Valid, "", Unspecified),
    (0x014E, 0x014E, Mapped, "\u{14F}", Unspecified),
    (0x014F, 0x014F, Valid, "", Unspecified),
    (0x0150, 0x0150, Mapped, "\u{151}", Unspecified),
    (0x0151, 0x0151, Valid, "", Unspecified),
    (0x0152, 0x0152, Mapped, "\u{153}", Unspecified),
    (0x0153, 0x0153, Valid, "", Unspecified),
    (0x0154, 0x0154, Mapped, "\u{155}", Unspecified),
    (0x0155, 0x0155, Valid, "", Unspecified),
    (0x0156, 0x0156, Mapped, "\u{157}", Unspecified),
    (0x0157, 0x0157, Valid, "", Unspecified),
    (0x0158, 0x0158, Mapped, "\u{159}", Unspecified),
    (0x0159, 0x0159, Valid, "", Unspecified),
    (0x015A, 0x015A, Mapped, "\u{15B}", Unspecified),
    (0x015B, 0x015B, Valid, "", Unspecified),
    (0x015C, 0x015C, Mapped, "\u{15D}", Unspecified),
    (0x015D, 0x015D, Valid, "", Unspecified),
    (0x015E, 0x015E, Mapped, "\u{15F}", Unspecified),
    (0x015F, 0x015F, Valid, "", Unspecified),
    (0x0160, 0x0160, Mapped, "\u{161}", Unspecified),
    (0x0161, 0x0161, Valid, "", Unspecified),
    (0x0162, 0x0162, Mapped, "\u{163}", Unspecified),
    (0x0163, 0x0163, Valid, "", Unspecified),
    (0x0164, 0x0164, Mapped, "\u{165}", Unspecified),
    (0x0165, 0x0165, Valid, "", Unspecified),
    (0x0166, 0x0166, Mapped, "\u{167}", Unspecified),
    (0x0167, 0x0167, Valid, "", Unspecified),
    (0x0168, 0x0168, Mapped, "\u{169}", Unspecified),
    (0x0169, 0x0169, Valid, "", Unspecified),
    (0x016A, 0x016A, Mapped, "\u{16B}", Unspecified),
    (0x016B, 0x016B, Valid, "", Unspecified),
    (0x016C, 0x016C, Mapped, "\u{16D}", Unspecified),
    (0x016D, 0x016D, Valid, "", Unspecified),
    (0x016E, 0x016E, Mapped, "\u{16F}", Unspecified),
    (0x016F, 0x016F, Valid, "", Unspecified),
    (0x0170, 0x0170, Mapped, "\u{171}", Unspecified),
    (0x0171, 0x0171, Valid, "", Unspecified),
    (0x0172, 0x0172, Mapped, "\u{173}", Unspecified),
    (0x0173, 0x0173, Valid, "", Unspecified),
    (0x0174, 0x0174, Mapped, "\u{175}", Unspecified),
    (0x0175, 0x0175, Valid, "", Unspecified),
    (0x0176, 0x0176, Mapped, "\u{177}", Unspecified),
    (0x0177, 0x0177, Valid, "", Unspecified),
    (0x0178, 0x0178, Mapped, "\u{FF}", Unspecified),
    (0x0179, 0x0179, Mapped, "\u{17A}", Unspecified),
    (0x017A, 0x017A, Valid, "", Unspecified),
    (0x017B, 0x017B, Mapped, "\u{17C}", Unspecified),
    (0x017C, 0x017C, Valid, "", Unspecified),
    (0x017D, 0x017D, Mapped, "\u{17E}", Unspecified),
    (0x017E, 0x017E, Valid, "", Unspecified),
    (0x017F, 0x017F, Mapped, "s", Unspecified),
    (0x0180, 0x0180, Valid, "", Unspecified),
    (0x0181, 0x0181, Mapped, "\u{253}", Unspecified),
    (0x0182, 0x0182, Mapped, "\u{183}", Unspecified),
    (0x0183, 0x0183, Valid, "", Unspecified),
    (0x0184, 0x0184, Mapped, "\u{185}", Unspecified),
    (0x0185, 0x0185, Valid, "", Unspecified),
    (0x0186, 0x0186, Mapped, "\u{254}", Unspecified),
    (0x0187, 0x0187, Mapped, "\u{188}", Unspecified),
    (0x0188, 0x0188, Valid, "", Unspecified),
    (0x0189, 0x0189, Mapped, "\u{256}", Unspecified),
    (0x018A, 0x018A, Mapped, "\u{257}", Unspecified),
    (0x018B, 0x018B, Mapped, "\u{18C}", Unspecified),
    (0x018C, 0x018D, Valid, "", Unspecified),
    (0x018E, 0x018E, Mapped, "\u{1DD}", Unspecified),
    (0x018F, 0x018F, Mapped, "\u{259}", Unspecified),
    (0x0190, 0x0190, Mapped, "\u{25B}", Unspecified),
    (0x0191, 0x0191, Mapped, "\u{192}", Unspecified),
    (0x0192, 0x0192, Valid, "", Unspecified),
    (0x0193, 0x0193, Mapped, "\u{260}", Unspecified),
    (0x0194, 0x0194, Mapped, "\u{263}", Unspecified),
    (0x0195, 0x0195, Valid, "", Unspecified),
    (0x0196, 0x0196, Mapped, "\u{269}", Unspecified),
    (0x0197, 0x0197, Mapped, "\u{268}", Unspecified),
    (0x0198, 0x0198, Mapped, "\u{199}", Unspecified),
    (0x0199, 0x019B, Valid, "", Unspecified),
    (0x019C, 0x019C, Mapped, "\u{26F}", Unspecified),
    (0x019D, 0x019D, Mapped, "\u{272}", Unspecified),
    (0x019E, 0x019E, Valid, "", Unspecified),
    (0x019F, 0x019F, Mapped, "\u{275}", Unspecified),
    (0x01A0, 0x01A0, Mapped, "\u{1A1}", Unspecified),
    (0x01A1, 0x01A1, Valid, "", Unspecified),
    (0x01A2, 0x01A2, Mapped, "\u{1A3}", Unspecified),
    (0x01A3, 0x01A3, Valid, "", Unspecified),
    (0x01A4, 0x01A4, Mapped, "\u{1A5}", Unspecified),
    (0x01A5, 0x01A5, Valid, "", Unspecified),
    (0x01A6, 0x01A6, Mapped, "\u{280}", Unspecified),
    (0x01A7, 0x01A7, Mapped, "\u{1A8}", Unspecified),
    (0x01A8, 0x01A8, Valid, "", Unspecified),
    (0x01A9, 0x01A9, Mapped, "\u{283}", Unspecified),
    (0x01AA, 0x01AB, Valid, "", Unspecified),
    (0x01AC, 0x01AC, Mapped, "\u{1AD}", Unspecified),
    (0x01AD, 0x01AD, Valid, "", Unspecified),
    (0x01AE, 0x01AE, Mapped, "\u{288}", Unspecified),
    (0x01AF, 0x01AF, Mapped, "\u{1B0}", Unspecified),
    (0x01B0, 0x01B0, Valid, "", Unspecified),
    (0x01B1, 0x01B1, Mapped, "\u{28A}", Unspecified),
    (0x01B2, 0x01B2, Mapped, "\u{28B}", Unspecified),
    (0x01B3, 0x01B3, Mapped, "\u{1B4}", Unspecified),
    (0x01B4, 0x01B4, Valid, "", Unspecified),
    (0x01B5, 0x01B5, Mapped, "\u{1B6}", Unspecified),
    (0x01B6, 0x01B6, Valid, "", Unspecified),
    (0x01B7, 0x01B7, Mapped, "\u{292}", Unspecified),
    (0x01B8, 0x01B8, Mapped, "\u{1B9}", Unspecified),
    (0x01B9, 0x01BB, Valid, "", Unspecified),
    (0x01BC, 0x01BC, Mapped, "\u{1BD}", Unspecified),
    (0x01BD, 0x01C3, Valid, "", Unspecified),
    (0x01C4, 0x01C6, Mapped, "d\u{17E}", Unspecified),
    (0x01C7, 0x01C9, Mapped, "lj", Unspecified),
    (0x01CA, 0x01CC, Mapped, "nj", Unspecified),
    (0x01CD, 0x01CD, Mapped, "\u{1CE}", Unspecified),
    (0x01CE, 0x01CE, Valid, "", Unspecified),
    (0x01CF, 0x01CF, Mapped, "\u{1D0}", Unspecified),
    (0x01D0, 0x01D0, Valid, "", Unspecified),
    (0x01D1, 0x01D1, Mapped, "\u{1D2}", Unspecified),
    (0x01D2, 0x01D2, Valid, "", Unspecified),
    (0x01D3, 0x01D3, Mapped, "\u{1D4}", Unspecified),
    (0x01D4, 0x01D4, Valid, "", Unspecified),
    (0x01D5, 0x01D5, Mapped, "\u{1D6}", Unspecified),
    (0x01D6, 0x01D6, Valid, "", Unspecified),
    (0x01D7, 0x01D7, Mapped, "\u{1D8}", Unspecified),
    (0x01D8, 0x01D8, Valid, "", Unspecified),
    (0x01D9, 0x01D9, Mapped, "\u{1DA}", Unspecified),
    (0x01DA, 0x01DA, Valid, "", Unspecified),
    (0x01DB, 0x01DB, Mapped, "\u{1DC}", Unspecified),
    (0x01DC, 0x01DD, Valid, "", Unspecified),
    (0x01DE, 0x01DE, Mapped, "\u{1DF}", Unspecified),
    (0x01DF, 0x01DF, Valid, "", Unspecified),
    (0x01E0, 0x01E0, Mapped, "\u{1E1}", Unspecified),
    (0x01E1, 0x01E1, Valid, "", Unspecified),
    (0x01E2, 0x01E2, Mapped, "\u{1E3}", Unspecified),
    (0x01E3, 0x01E3, Valid, "", Unspecified),
    (0x01E4, 0x01E4, Mapped, "\u{1E5}", Unspecified),
    (0x01E5, 0x01E5, Valid, "", Unspecified),
    (0x01E6, 0x01E6, Mapped, "\u{1E7}", Unspecified),
    (0x01E7, 0x01E7, Valid, "", Unspecified),
    (0x01E8, 0x01E8, Mapped, "\u{1E9}", Unspecified),
    (0x01E9, 0x01E9, Valid, "", Unspecified),
    (0x01EA, 0x01EA, Mapped, "\u{1EB}", Unspecified),
    (0x01EB, 0x01EB, Valid, "", Unspecified),
    (0x01EC, 0x01EC, Mapped, "\u{1ED}", Unspecified),
    (0x01ED, 0x01ED, Valid, "", Unspecified),
    (0x01EE, 0x01EE, Mapped, "\u{1EF}", Unspecified),
    (0x01EF, 0x01F0, Valid, "", Unspecified),
    (0x01F1, 0x01F3, Mapped, "dz", Unspecified),
    (0x01F4, 0x01F4, Mapped, "\u{1F5}", Unspecified),
    (0x01F5, 0x01F5, Valid, "", Unspecified),
    (0x01F6, 0x01F6, Mapped, "\u{195}", Unspecified),
    (0x01F7, 0x01F7, Mapped, "\u{1BF}", Unspecified),
    (0x01F8, 0x01F8, Mapped, "\u{1F9}", Unspecified),
    (0x01F9, 0x01F9, Valid, "", Unspecified),
    (0x01FA, 0x01FA, Mapped, "\u{1FB}", Unspecified),
    (0x01FB, 0x01FB, Valid, "", Unspecified),
    (0x01FC, 0x01FC, Mapped, "\u{1FD}", Unspecified),
    (0x01FD, 0x01FD, Valid, "", Unspecified),
    (0x01FE, 0x01FE, Mapped, "\u{1FF}", Unspecified),
    (0x01FF, 0x01FF, Valid, "", Unspecified),
    (0x0200, 0x0200, Mapped, "\u{201}", Unspecified),
    (0x0201, 0x0201, Valid, "", Unspecified),
    (0x0202, 0x0202, Mapped, "\u{203}", Unspecified),
    (0x0203, 0x0203, Valid, "", Unspecified),
    (0x0204, 0x0204, Mapped, "\u{205}", Unspecified),
    (0x0205, 0x0205, Valid, "", Unspecified),
    (0x0206, 0x0206, Mapped, "\u{207}", Unspecified),
    (0x0207, 0x0207, Valid, "", Unspecified),
    (0x0208, 0x0208, Mapped, "\u{209}", Unspecified),
    (0x0209, 0x0209, Valid, "", Unspecified),
    (0x020A, 0x020A, Mapped, "\u{20B}", Unspecified),
    (0x020B, 0x020B, Valid, "", Unspecified),
    (0x020C, 0x020C, Mapped, "\u{20D}", Unspecified),
    (0x020D, 0x020D, Valid, "", Unspecified),
    (0x020E, 0x020E, Mapped, "\u{20F}", Unspecified),
    (0x020F, 0x020F, Valid, "", Unspecified),
    (0x0210, 0x0210, Mapped, "\u{211}", Unspecified),
    (0x0211, 0x0211, Valid, "", Unspecified),
    (0x0212, 0x0212, Mapped, "\u{213}", Unspecified),
    (0x0213, 0x0213, Valid, "", Unspecified),
    (0x0214, 0x0214, Mapped, "\u{215}", Unspecified),
    (0x0215, 0x0215, Valid, "", Unspecified),
    (0x0216, 0x0216, Mapped, "\u{217}", Unspecified),
    (0x0217, 0x0217, Valid, "", Unspecified),
    (0x0218, 0x0218, Mapped, "\u{219}", Unspecified),
    (0x0219, 0x0219, Valid, "", Unspecified),
    (0x021A, 0x021A, Mapped, "\u{21B}", Unspecified),
    (0x021B, 0x021B, Valid, "", Unspecified),
    (0x021C, 0x021C, Mapped, "\u{21D}", Unspecified),
    (0x021D, 0x021D, Valid, "", Unspecified),
    (0x021E, 0x021E, Mapped, "\u{21F}", Unspecified),
    (0x021F, 0x021F, Valid, "", Unspecified),
    (0x0220, 0x0220, Mapped, "\u{19E}", Unspecified),
    (0x0221, 0x0221, Valid, "", Unspecified),
    (0x0222, 0x0222, Mapped, "\u{223}", Unspecified),
    (0x0223, 0x0223, Valid, "", Unspecified),
    (0x0224, 0x0224, Mapped, "\u{225}", Unspecified),
    (0x0225, 0x0225, Valid, "", Unspecified),
    (0x0226, 0x0226, Mapped, "\u{227}", Unspecified),
    (0x0227, 0x0227, Valid, "", Unspecified),
    (0x0228, 0x0228, Mapped, "\u{229}", Unspecified),
    (0x0229, 0x0229, Valid, "", Unspecified),
    (0x022A, 0x022A, Mapped, "\u{22B}", Unspecified),
    (0x022B, 0x022B, Valid, "", Unspecified),
    (0x022C, 0x022C, Mapped, "\u{22D}", Unspecified),
    (0x022D, 0x022D, Valid, "", Unspecified),
    (0x022E, 0x022E, Mapped, "\u{22F}", Unspecified),
    (0x022F, 0x022F, Valid, "", Unspecified),
    (0x0230, 0x0230, Mapped, "\u{231}", Unspecified),
    (0x0231, 0x0231, Valid, "", Unspecified),
    (0x0232, 0x0232, Mapped, "\u{233}", Unspecified),
    (0x0233, 0x0239, Valid, "", Unspecified),
    (0x023A, 0x023A, Mapped, "\u{2C65}", Unspecified),
    (0x023B, 0x023B, Mapped, "\u{23C}", Unspecified),
    (0x023C, 0x023C, Valid, "", Unspecified),
    (0x023D, 0x023D, Mapped, "\u{19A}", Unspecified),
    (0x023E, 0x023E, Mapped, "\u{2C66}", Unspecified),
    (0x023F, 0x0240, Valid, "", Unspecified),
    (0x0241, 0x0241, Mapped, "\u{242}", Unspecified),
    (0x0242, 0x0242, Valid, "", Unspecified),
    (0x0243, 0x0243, Mapped, "\u{180}", Unspecified),
    (0x0244, 0x0244, Mapped, "\u{289}", Unspecified),
    (0x0245, 0x0245, Mapped, "\u{28C}", Unspecified),
    (0x0246, 0x0246, Mapped, "\u{247}", Unspecified),
    (0x0247, 0x0247, Valid, "", Unspecified),
    (0x0248, 0x0248, Mapped, "\u{249}", Unspecified),
    (0x0249, 0x0249, Valid, "", Unspecified),
    (0x024A, 0x024A, Mapped, "\u{24B}", Unspecified),
    (0x024B, 0x024B, Valid, "", Unspecified),
    (0x024C, 0x024C, Mapped, "\u{24D}", Unspecified),
    (0x024D, 0x024D, Valid, "", Unspecified),
    (0x024E, 0x024E, Mapped, "\u{24F}", Unspecified),
    (0x024F, 0x02AF, Valid, "", Unspecified),
    (0x02B0, 0x02B0, Mapped, "h", Unspecified),
    (0x02B1, 0x02B1, Mapped, "\u{266}", Unspecified),
    (0x02B2, 0x02B2, Mapped, "j", Unspecified),
    (0x02B3, 0x02B3, Mapped, "r", Unspecified),
    (0x02B4, 0x02B4, Mapped, "\u{279}", Unspecified),
    (0x02B5, 0x02B5, Mapped, "\u{27B}", Unspecified),
    (0x02B6, 0x02B6, Mapped, "\u{281}", Unspecified),
    (0x02B7, 0x02B7, Mapped, "w", Unspecified),
    (0x02B8, 0x02B8, Mapped, "y", Unspecified),
    (0x02B9, 0x02C1, Valid, "", Unspecified),
    (0x02C2, 0x02C5, Valid, "", Nv8),
    (0x02C6, 0x02D1, Valid, "", Unspecified),
    (0x02D2, 0x02D7, Valid, "", Nv8),
    (0x02D8, 0x02D8, DisallowedStd3Mapped, " \u{306}", Unspecified),
    (0x02D9, 0x02D9, DisallowedStd3Mapped, " \u{307}", Unspecified),
    (0x02DA, 0x02DA, DisallowedStd3Mapped, " \u{30A}", Unspecified),
    (0x02DB, 0x02DB, DisallowedStd3Mapped, " \u{328}", Unspecified),
    (0x02DC, 0x02DC, DisallowedStd3Mapped, " \u{303}", Unspecified),
    (0x02DD, 0x02DD, DisallowedStd3Mapped, " \u{30B}", Unspecified),
    (0x02DE, 0x02DF, Valid, "", Nv8),
    (0x02E0, 0x02E0, Mapped, "\u{263}", Unspecified),
    (0x02E1, 0x02E1, Mapped, "l", Unspecified),
    (0x02E2, 0x02E2, Mapped, "s", Unspecified),
    (0x02E3, 0x02E3, Mapped, "x", Unspecified),
    (0x02E4, 0x02E4, Mapped, "\u{295}", Unspecified),
    (0x02E5, 0x02EB, Valid, "", Nv8),
    (0x02EC, 0x02EC, Valid, "", Unspecified),
    (0x02ED, 0x02ED, Valid, "", Nv8),
    (0x02EE, 0x02EE, Valid, "", Unspecified),
    (0x02EF, 0x02FF, Valid, "", Nv8),
    (0x0300, 0x033F, Valid, "", Unspecified),
    (0x0340, 0x0340, Mapped, "\u{300}", Unspecified),
    (0x0341, 0x0341, Mapped, "\u{301}", Unspecified),
    (0x0342, 0x0342, Valid, "", Unspecified),
    (0x0343, 0x0343, Mapped, "\u{313}", Unspecified),
    (0x0344, 0x0344, Mapped, "\u{308}\u{301}", Unspecified),
    (0x0345, 0x0345, Mapped, "\u{3B9}", Unspecified),
    (0x0346, 0x034E, Valid, "", Unspecified),
    (0x034F, 0x034F, Ignored, "", Unspecified),
    (0x0350, 0x036F, Valid, "", Unspecified),
    (0x0370, 0x0370, Mapped, "\u{371}", Unspecified),
    (0x0371, 0x0371, Valid, "", Unspecified),
    (0x0372, 0x0372, Mapped, "\u{373}", Unspecified),
    (0x0373, 0x0373, Valid, "", Unspecified),
    (0x0374, 0x0374, Mapped, "\u{2B9}", Unspecified),
    (0x0375, 0x0375, Valid, "", Unspecified),
    (0x0376, 0x0376, Mapped, "\u{377}", Unspecified),
    (0x0377, 0x0377, Valid, "", Unspecified),
    (0x0378, 0x0379, Disallowed, "", Unspecified),
    (0x037A, 0x037A, DisallowedStd3Mapped, " \u{3B9}", Unspecified),
    (0x037B, 0x037D, Valid, "", Unspecified),
    (0x037E, 0x037E, DisallowedStd3Mapped, ";", Unspecified),
    (0x037F, 0x037F, Mapped, "\u{3F3}", Unspecified),
    (0x0380, 0x0383, Disallowed, "", Unspecified),
    (0x0384, 0x0384, DisallowedStd3Mapped, " \u{301}", Unspecified),
    (0x0385, 0x0385, DisallowedStd3Mapped, " \u{308}\u{301}", Unspecified),
    (0x0386, 0x0386, Mapped, "\u{3AC}", Unspecified),
    (0x0387, 0x0387, Mapped, "\u{B7}", Unspecified),
    (0x0388, 0x0388, Mapped, "\u{3AD}", Unspecified),
    (0x0389, 0x0389, Mapped, "\u{3AE}", Unspecified),
    (0x038A, 0x038A, Mapped, "\u{3AF}", Unspecified),
    (0x038B, 0x038B, Disallowed, "", Unspecified),
    (0x038C, 0x038C, Mapped, "\u{3CC}", Unspecified),
    (0x038D, 0x038D, Disallowed, "", Unspecified),
    (0x038E, 0x038E, Mapped, "\u{3CD}", Unspecified),
    (0x038F, 0x038F, Mapped, "\u{3CE}", Unspecified),
    (0x0390, 0x0390, Valid, "", Unspecified),
    (0x0391, 0x0391, Mapped, "\u{3B1}", Unspecified),
    (0x0392, 0x0392, Mapped, "\u{3B2}", Unspecified),
    (0x0393, 0x0393, Mapped, "\u{3B3}", Unspecified),
    (0x0394, 0x0394, Mapped, "\u{3B4}", Unspecified),
    (0x0395, 0x0395, Mapped, "\u{3B5}", Unspecified),
    (0x0396, 0x0396, Mapped, "\u{3B6}", Unspecified),
    (0x0397, 0x0397, Mapped, "\u{3B7}", Unspecified),
    (0x0398, 0x0398, Mapped, "\u{3B8}", Unspecified),
    (0x0399, 0x0399, Mapped, "\u{3B9}", Unspecified),
    (0x039A, 0x039A, Mapped, "\u{3BA}", Unspecified),
    (0x039B, 0x039B, Mapped, "\u{3BB}", Unspecified),
    (0x039C, 0x039C, Mapped, "\u{3BC}", Unspecified),
    (0x039D, 0x039D, Mapped, "\u{3BD}", Unspecified),
    (0x039E, 0x039E, Mapped, "\u{3BE}", Unspecified),
    (0x039F, 0x039F, Mapped, "\u{3BF}", Unspecified),
    (0x03A0, 0x03A0, Mapped, "\u{3C0}", Unspecified),
    (0x03A1, 0x03A1, Mapped, "\u{3C1}", Unspecified),
    (0x03A2, 0x03A2, Disallowed, "", Unspecified),
    (0x03A3, 0x03A3, Mapped, "\u{3C3}", Unspecified),
    (0x03A4, 0x03A4, Mapped, "\u{3C4}", Unspecified),
    (0x03A5, 0x03A5, Mapped, "\u{3C5}", Unspecified),
    (0x03A6, 0x03A6, Mapped, "\u{3C6}", Unspecified),
    (0x03A7, 0x03A7, Mapped, "\u{3C7}", Unspecified),
    (0x03A8, 0x03A8, Mapped, "\u{3C8}", Unspecified),
    (0x03A9, 0x03A9, Mapped, "\u{3C9}", Unspecified),
    (0x03AA, 0x03AA, Mapped, "\u{3CA}", Unspecified),
    (0x03AB, 0x03AB, Mapped, "\u{3CB}", Unspecified),
    (0x03AC, 0x03C1, Valid, "", Unspecified),
    (0x03C2, 0x03C2, Deviation, "\u{3C3}", Unspecified),
    (0x03C3, 0x03CE, Valid, "", Unspecified),
    (0x03CF, 0x03CF, Mapped, "\u{3D7}", Unspecified),
    (0x03D0, 0x03D0, Mapped, "\u{3B2}", Unspecified),
    (0x03D1, 0x03D1, Mapped, "\u{3B8}", Unspecified),
    (0x03D2, 0x03D2, Mapped, "\u{3C5}", Unspecified),
    (0x03D3, 0x03D3, Mapped, "\u{3CD}", Unspecified),
    (0x03D4, 0x03D4, Mapped, "\u{3CB}", Unspecified),
    (0x03D5, 0x03D5, Mapped, "\u{3C6}", Unspecified),
    (0x03D6, 0x03D6, Mapped, "\u{3C0}", Unspecified),
    (0x03D7, 0x03D7, Valid, "", Unspecified),
    (0x03D8, 0x03D8, Mapped, "\u{3D9}", Unspecified),
    (0x03D9, 0x03D9, Valid, "", Unspecified),
    (0x03DA, 0x03DA, Mapped, "\u{3DB}", Unspecified),
    (0x03DB, 0x03DB, Valid, "", Unspecified),
    (0x03DC, 0x03DC, Mapped, "\u{3DD}", Unspecified),
    (0x03DD, 0x03DD, Valid, "", Unspecified),
    (0x03DE, 0x03DE, Mapped, "\u{3DF}", Unspecified),
    (0x03DF, 0x03DF, Valid, "", Unspecified),
    (0x03E0, 0x03E0, Mapped, "\u{3E1}", Unspecified),
    (0x03E1, 0x03E1, Valid, "", Unspecified),
    (0x03E2, 0x03E2, Mapped, "\u{3E3}", Unspecified),
    (0x03E3, 0x03E3, Valid, "", Unspecified),
    (0x03E4, 0x03E4, Mapped, "\u{3E5}", Unspecified),
    (0x03E5, 0x03E5, Valid, "", Unspecified),
    (0x03E6, 0x03E6, Mapped, "\u{3E7}", Unspecified),
    (0x03E7, 0x03E7, Valid, "", Unspecified),
    (0x03E8, 0x03E8, Mapped, "\u{3E9}", Unspecified),
    (0x03E9, 0x03E9, Valid, "", Unspecified),
    (0x03EA, 0x03EA, Mapped, "\u{3EB}", Unspecified),
    (0x03EB, 0x03EB, Valid, "", Unspecified),
    (0x03EC, 0x03EC, Mapped, "\u{3ED}", Unspecified),
    (0x03ED, 0x03ED, Valid, "", Unspecified),
    (0x03EE, 0x03EE, Mapped, "\u{3EF}", Unspecified),
    (0x03EF, 0x03EF, Valid, "", Unspecified),
    (0x03F0, 0x03F0, Mapped, "\u{3BA}", Unspecified),
    (0x03F1, 0x03F1, Mapped, "\u{3C1}", Unspecified),
    (0x03F2, 0x03F2, Mapped, "\u{3C3}", Unspecified),
    (0x03F3, 0x03F3, Valid, "", Unspecified),
    (0x03F4, 0x03F4, Mapped, "\u{3B8}", Unspecified),
    (0x03F5, 0x03F5, Mapped, "\u{3B5}", Unspecified),
    (0x03F6, 0x03F6, Valid, "", Nv8),
    (0x03F7, 0x03F7, Mapped, "\u{3F8}", Unspecified),
    (0x03F8, 0x03F8, Valid, "", Unspecified),
    (0x03F9, 0x03F9, Mapped, "\u{3C3}", Unspecified),
    (0x03FA, 0x03FA, Mapped, "\u{3FB}", Unspecified),
    (0x03FB, 0x03FC, Valid, "", Unspecified),
    (0x03FD, 0x03FD, Mapped, "\u{37B}", Unspecified),
    (0x03FE, 0x03FE, Mapped, "\u{37C}", Unspecified),
    (0x03FF, 0x03FF, Mapped, "\u{37D}", Unspecified),
    (0x0400, 0x0400, Mapped, "\u{450}", Unspecified),
    (0x0401, 0x0401, Mapped, "\u{451}", Unspecified),
    (0x0402, 0x0402, Mapped, "\u{452}", Unspecified),
    (0x0403, 0x0403, Mapped, "\u{453}", Unspecified),
    (0x0404, 0x0404, Mapped, "\u{454}", Unspecified),
    (0x0405, 0x0405, Mapped, "\u{455}", Unspecified),
    (0x0406, 0x0406, Mapped, "\u{456}", Unspecified),
    (0x0407, 0x0407, Mapped, "\u{457}", Unspecified),
    (0x0408, 0x0408, Mapped, "\u{458}", Unspecified),
    (0x0409, 0x0409, Mapped, "\u{459}", Unspecified),
    (0x040A, 0x040A, Mapped, "\u{45A}", Unspecified),
    (0x040B, 0x040B, Mapped, "\u{45B}", Unspecified),
    (0x040C, 0x040C, Mapped, "\u{45C}", Unspecified),
    (0x040D, 0x040D, Mapped, "\u{45D}", Unspecified),
    (0x040E, 0x040E, Mapped, "\u{45E}", Unspecified),
    (0x040F, 0x040F, Mapped, "\u{45F}", Unspecified),
    (0x0410, 0x0410, Mapped, "\u{430}", Unspecified),
    (0x0411, 0x0411, Mapped, "\u{431}", Unspecified),
    (0x0412, 0x0412, Mapped, "\u{432}", Unspecified),
    (0x0413, 0x0413, Mapped, "\u{433}", Unspecified),
    (0x0414, 0x0414, Mapped, "\u{434}", Unspecified),
    (0x0415, 0x0415, Mapped, "\u{435}", Unspecified),
    (0x0416, 0x0416, Mapped, "\u{436}", Unspecified),
    (0x0417, 0x0417, Mapped, "\u{437}", Unspecified),
    (0x0418, 0x0418, Mapped, "\u{438}", Unspecified),
    (0x0419, 0x0419, Mapped, "\u{439}", Unspecified),
    (0x041A, 0x041A, Mapped, "\u{43A}", Unspecified),
    (0x041B, 0x041B, Mapped, "\u{43B}", Unspecified),
    (0x041C, 0x041C, Mapped, "\u{43C}", Unspecified),
    (0x041D, 0x041D, Mapped, "\u{43D}", Unspecified),
    (0x041E, 0x041E, Mapped, "\u{43E}", Unspecified),
    (0x041F, 0x041F, Mapped, "\u{43F}", Unspecified),
    (0x0420, 0x0420, Mapped, "\u{440}", Unspecified),
    (0x0421, 0x0421, Mapped, "\u{441}", Unspecified),
    (0x0422, 0x0422, Mapped, "\u{442}", Unspecified),
    (0x0423, 0x0423, Mapped, "\u{443}", Unspecified),
    (0x0424, 0x0424, Mapped, "\u{444}", Unspecified),
    (0x0425, 0x0425, Mapped, "\u{445}", Unspecified),
    (0x0426, 0x0426, Mapped, "\u{446}", Unspecified),
    (0x0427, 0x0427, Mapped, "\u{447}", Unspecified),
    (0x0428, 0x0428, Mapped, "\u{448}", Unspecified),
    (0x0429, 0x0429, Mapped, "\u{449}", Unspecified),
    (0x042A, 0x042A, Mapped, "\u{44A}", Unspecified),
    (0x042B, 0x042B, Mapped, "\u{44B}", Unspecified),
    (0x042C, 0x042C, Mapped, "\u{44C}", Unspecified),
    (0x042D, 0x042D, Mapped, "\u{44D}", Unspecified),
    (0x042E, 0x042E, Mapped, "\u{44E}", Unspecified),
    (0x042F, 0x042F, Mapped, "\u{44F}", Unspecified),
    (0x0430, 0x045F, Valid, "", Unspecified),
    (0x0460, 0x0460, Mapped, "\u{461}", Unspecified),
    (0x0461, 0x0461, Valid, "", Unspecified),
    (0x0462, 0x0462, Mapped, "\u{463}", Unspecified),
    (0x0463, 0x0463, Valid, "", Unspecified),
    (0x0464, 0x0464, Mapped, "\u{465}", Unspecified),
    (0x0465, 0x0465, Valid, "", Unspecified),
    (0x0466, 0x0466, Mapped, "\u{467}", Unspecified),
    (0x0467, 0x0467, Valid, "", Unspecified),
    (0x0468, 0x0468, Mapped, "\u{469}", Unspecified),
    (0x0469, 0x0469, Valid, "", Unspecified),
    (0x046A, 0x046A, Mapped, "\u{46B}", Unspecified),
    (0x046B, 0x046B, Valid, "", Unspecified),
    (0x046C, 0x046C, Mapped, "\u{46D}", Unspecified),
    (0x046D, 0x046D, Valid, "", Unspecified),
    (0x046E, 0x046E, Mapped, "\u{46F}", Unspecified),
    (0x046F, 0x046F, Valid, "", Unspecified),
    (0x0470, 0x0470, Mapped, "\u{471}", Unspecified),
    (0x0471, 0x0471, Valid, "", Unspecified),
    (0x0472, 0x0472, Mapped, "\u{473}", Unspecified),
    (0x0473, 0x0473, Valid, "", Unspecified),
    (0x0474, 0x0474, Mapped, "\u{475}", Unspecified),
    (0x0475, 0x0475, Valid, "", Unspecified),
    (0x0476, 0x0476, Mapped, "\u{477}", Unspecified),
    (0x0477, 0x0477, Valid, "", Unspecified),
    (0x0478, 0x0478, Mapped, "\u{479}", Unspecified),
    (0x0479, 0x0479, Valid, "", Unspecified),
    (0x047A, 0x047A, Mapped, "\u{47B}", Unspecified),
    (0x047B, 0x047B, Valid, "", Unspecified),
    (0x047C, 0x047C, Mapped, "\u{47D}", Unspecified),
    (0x047D, 0x047D, Valid, "", Unspecified),
    (0x047E, 0x047E, Mapped, "\u{47F}", Unspecified),
    (0x047F, 0x047F, Valid, "", Unspecified),
    (0x0480, 0x0480, Mapped, "\u{481}", Unspecified),
    (0x0481, 0x0481, Valid, "", Unspecified),
    (0x0482, 0x0482, Valid, "", Nv8),
    (0x0483, 0x0487, Valid, "", Unspecified),
    (0x0488, 0x0489, Valid, "", Nv8),
    (0x048A, 0x048A, Mapped, "\u{48B}", Unspecified),
    (0x048B, 0x048B, Valid, "", Unspecified),
    (0x048C, 0x048C, Mapped, "\u{48D}", Unspecified),
    (0x048D, 0x048D, Valid, "", Unspecified),
    (0x048E, 0x048E, Mapped, "\u{48F}", Unspecified),
    (0x048F, 0x048F, Valid, "", Unspecified),
    (0x0490, 0x0490, Mapped, "\u{491}", Unspecified),
    (0x0491, 0x0491, Valid, "", Unspecified),
    (0x0492, 0x0492, Mapped, "\u{493}", Unspecified),
    (0x0493, 0x0493, Valid, "", Unspecified),
    (0x0494, 0x0494, Mapped, "\u{495}", Unspecified),
    (0x0495, 0x0495, Valid, "", Unspecified),
    (0x0496, 0x0496, Mapped, "\u{497}", Unspecified),
    (0x0497, 0x0497, Valid, "", Unspecified),
    (0x0498, 0x0498, Mapped, "\u{499}", Unspecified),
    (0x0499, 0x0499, Valid, "", Unspecified),
    (0x049A, 0x049A, Mapped, "\u{49B}", Unspecified),
    (0x049B, 0x049B, Valid, "", Unspecified),
    (0x049C, 0x049C, Mapped, "\u{49D}", Unspecified),
    (0x049D, 0x049D, Valid, "", Unspecified),
    (0x049E, 0x049E, Mapped, "\u{49F}", Unspecified),
    (0x049F, 0x049F, Valid, "", Unspecified),
    (0x04A0, 0x04A0, Mapped, "\u{4A1}", Unspecified),
    (0x04A1, 0x04A1, Valid, "", Unspecified),
    (0x04A2, 0x04A2, Mapped, "\u{4A3}", Unspecified),
    (0x04A3, 0x04A3, Valid, "", Unspecified),
    (0x04A4, 0x04A4, Mapped, "\u{4A5}", Unspecified),
    (0x04A5, 0x04A5, Valid, "", Unspecified),
    (0x04A6, 0x04A6, Mapped, "\u{4A7}", Unspecified),
    (0x04A7, 0x04A7, Valid, "", Unspecified),
    (0x04A8, 0x04A8, Mapped, "\u{4A9}", Unspecified),
    (0x04A9, 0x04A9, Valid, "", Unspecified),
    (0x04AA, 0x04AA, Mapped, "\u{4AB}", Unspecified),
    (0x04AB, 0x04AB, Valid, "", Unspecified),
    (0x04AC, 0x04AC, Mapped, "\u{4AD}", Unspecified),
    (0x04AD, 0x04AD, Valid, "", Unspecified),
    (0x04AE, 0x04AE, Mapped, "\u{4AF}", Unspecified),
    (0x04AF, 0x04AF, Valid, "", Unspecified),
    (0x04B0, 0x04B0, Mapped, "\u{4B1}", Unspecified),
    (0x04B1, 0x04B1, Valid, "", Unspecified),
    (0x04B2, 0x04B2, Mapped, "\u{4B3}", Unspecified),
    (0x04B3, 0x04B3, Valid, "", Unspecified),
    (0x04B4, 0x04B4, Mapped, "\u{4B5}", Unspecified),
    (0x04B5, 0x04B5, Valid, "", Unspecified),
    (0x04B6, 0x04B6, Mapped, "\u{4B7}", Unspecified),
    (0x04B7, 0x04B7, Valid, "", Unspecified),
    (0x04B8, 0x04B8, Mapped, "\u{4B9}", Unspecified),
    (0x04B9, 0x04B9, Valid, "", Unspecified),
    (0x04BA, 0x04BA, Mapped, "\u{4BB}", Unspecified),
    (0x04BB, 0x04BB, Valid, "", Unspecified),
    (0x04BC, 0x04BC, Mapped, "\u{4BD}", Unspecified),
    (0x04BD, 0x04BD, Valid, "", Unspecified),
    (0x04BE, 0x04BE, Mapped, "\u{4BF}", Unspecified),
    (0x04BF, 0x04BF, Valid, "", Unspecified),
    (0x04C0, 0x04C0, Disallowed, "", Unspecified),
    (0x04C1, 0x04C1, Mapped, "\u{4C2}", Unspecified),
    (0x04C2, 0x04C2, Valid, "", Unspecified),
    (0x04C3, 0x04C3, Mapped, "\u{4C4}", Unspecified),
    (0x04C4, 0x04C4, Valid, "", Unspecified),
    (0x04C5, 0x04C5, Mapped, "\u{4C6}", Unspecified),
    (0x04C6, 0x04C6, Valid, "", Unspecified),
    (0x04C7, 0x04C7, Mapped, "\u{4C8}", Unspecified),
    (0x04C8, 0x04C8, Valid, "", Unspecified),
    (0x04C9, 0x04C9, Mapped, "\u{4CA}", Unspecified),
    (0x04CA, 0x04CA, Valid, "", Unspecified),
    (0x04CB, 0x04CB, Mapped, "\u{4CC}", Unspecified),
    (0x04CC, 0x04CC, Valid, "", Unspecified),
    (0x04CD, 0x04CD, Mapped, "\u{4CE}", Unspecified),
    (0x04CE, 0x04CF, Valid, "", Unspecified),
    (0x04D0, 0x04D0, Mapped, "\u{4D1}", Unspecified),
    (0x04D1, 0x04D1, Valid, "", Unspecified),
    (0x04D2, 0x04D2, Mapped, "\u{4D3}", Unspecified),
    (0x04D3, 0x04D3, Valid, "", Unspecified),
    (0x04D4, 0x04D4, Mapped, "\u{4D5}", Unspecified),
    (0x04D5, 0x04D5, Valid, "", Unspecified),
    (0x04D6, 0x04D6, Mapped, "\u{4D7}", Unspecified),
    (0x04D7, 0x04D7, Valid, "", Unspecified),
    (0x04D8, 0x04D8, Mapped, "\u{4D9}", Unspecified),
    (0x04D9, 0x04D9, Valid, "", Unspecified),
    (0x04DA, 0x04DA, Mapped, "\u{4DB}", Unspecified),
    (0x04DB, 0x04DB, Valid, "", Unspecified),
    (0x04DC, 0x04DC, Mapped, "\u{4DD}", Unspecified),
    (0x04DD, 0x04DD, Valid, "", Unspecified),
    (0x04DE, 0x04DE, Mapped, "\u{4DF}", Unspecified),
    (0x04DF, 0x04DF, Valid, "", Unspecified),
    (0x04E0, 0x04E0, Mapped, "\u{4E1}", Unspecified),
    (0x04E1, 0x04E1, Valid, "", Unspecified),
    (0x04E2, 0x04E2, Mapped, "\u{4E3}", Unspecified),
    (0x04E3, 0x04E3, Valid, "", Unspecified),
    (0x04E4, 0x04E4, Mapped, "\u{4E5}", Unspecified),
    (0x04E5, 0x04E5, Valid, "", Unspecified),
    (0x04E6, 0x04E6, Mapped, "\u{4E7}", Unspecified),
    (0x04E7, 0x04E7, Valid, "", Unspecified),
    (0x04E8, 0x04E8, Mapped, "\u{4E9}", Unspecified),
    (0x04E9, 0x04E9, Valid, "", Unspecified),
    (0x04EA, 0x04EA, Mapped, "\u{4EB}", Unspecified),
    (0x04EB, 0x04EB, Valid, "", Unspecified),
    (0x04EC, 0x04EC, Mapped, "\u{4ED}", Unspecified),
    (0x04ED, 0x04ED, Valid, "", Unspecified),
    (0x04EE, 0x04EE, Mapped, "\u{4EF}", Unspecified),
    (0x04EF, 0x04EF, Valid, "", Unspecified),
    (0x04F0, 0x04F0, Mapped, "\u{4F1}", Unspecified),
    (0x04F1, 0x04F1, Valid, "", Unspecified),
    (0x04F2, 0x04F2, Mapped, "\u{4F3}", Unspecified),
    (0x04F3, 0x04F3, Valid, "", Unspecified),
    (0x04F4, 0x04F4, Mapped, "\u{4F5}", Unspecified),
    (0x04F5, 0x04F5, Valid, "", Unspecified),
    (0x04F6, 0x04F6, Mapped, "\u{4F7}", Unspecified),
    (0x04F7, 0x04F7, Valid, "", Unspecified),
    (0x04F8, 0x04F8, Mapped, "\u{4F9}", Unspecified),
    (0x04F9, 0x04F9, Valid, "", Unspecified),
    (0x04FA, 0x04FA, Mapped, "\u{4FB}", Unspecified),
    (0x04FB, 0x04FB, Valid, "", Unspecified),
    (0x04FC, 0x04FC, Mapped, "\u{4FD}", Unspecified),
    (0x04FD, 0x04FD, Valid, "", Unspecified),
    (0x04FE, 0x04FE, Mapped, "\u{4FF}", Unspecified),
    (0x04FF, 0x04FF, Valid, "", Unspecified),
    (0x0500, 0x0500, Mapped, "\u{501}", Unspecified),
    (0x0501, 0x0501, Valid, "", Unspecified),
    (0x0502, 0x0502, Mapped, "\u{503}", Unspecified),
    (0x0503, 0x0503, Valid, "", Unspecified),
    (0x0504, 0x0504, Mapped, "\u{505}", Unspecified),
    (0x0505, 0x0505, Valid, "", Unspecified),
    (0x0506, 0x0506, Mapped, "\u{507}", Unspecified),
    (0x0507, 0x0507, Valid, "", Unspecified),
    (0x0508, 0x0508, Mapped, "\u{509}", Unspecified),
    (0x0509, 0x0509, Valid, "", Unspecified),
    (0x050A, 0x050A, Mapped, "\u{50B}", Unspecified),
    (0x050B, 0x050B, Valid, "", Unspecified),
    (0x050C, 0x050C, Mapped, "\u{50D}", Unspecified),
    (0x050D, 0x050D, Valid, "", Unspecified),
    (0x050E, 0x050E, Mapped, "\u{50F}", Unspecified),
    (0x050F, 0x050F, Valid, "", Unspecified),
    (0x0510, 0x0510, Mapped, "\u{511}", Unspecified),
    (0x0511, 0x0511, Valid, "", Unspecified),
    (0x0512, 0x0512, Mapped, "\u{513}", Unspecified),
    (0x0513, 0x0513, Valid, "", Unspecified),
    (0x0514, 0x0514, Mapped, "\u{515}", Unspecified),
    (0x0515, 0x0515, Valid, "", Unspecified),
    (0x0516, 0x0516, Mapped, "\u{517}", Unspecified),
    (0x0517, 0x0517, Valid, "", Unspecified),
    (0x0518, 0x0518, Mapped, "\u{519}", Unspecified),
    (0x0519, 0x0519, Valid, "", Unspecified),
    (0x051A, 0x051A, Mapped, "\u{51B}", Unspecified),
    (0x051B, 0x051B, Valid, "", Unspecified),
    (0x051C, 0x051C, Mapped, "\u{51D}", Unspecified),
    (0x051D, 0x051D, Valid, "", Unspecified),
    (0x051E, 0x051E, Mapped, "\u{51F}", Unspecified),
    (0x051F, 0x051F, Valid, "", Unspecified),
    (0x0520, 0x0520, Mapped, "\u{521}", Unspecified),
    (0x0521, 0x0521, Valid, "", Unspecified),
    (0x0522, 0x0522, Mapped, "\u{523}", Unspecified),
    (0x0523, 0x0523, Valid, "", Unspecified),
    (0x0524, 0x0524, Mapped, "\u{525}", Unspecified),
    (0x0525, 0x0525, Valid, "", Unspecified),
    (0x0526, 0x0526, Mapped, "\u{527}", Unspecified),
    (0x0527, 0x0527, Valid, "", Unspecified),
    (0x0528, 0x0528, Mapped, "\u{529}", Unspecified),
    (0x0529, 0x0529, Valid, "", Unspecified),
    (0x052A, 0x052A, Mapped, "\u{52B}", Unspecified),
    (0x052B, 0x052B, Valid, "", Unspecified),
    (0x052C, 0x052C, Mapped, "\u{52D}", Unspecified),
    (0x052D, 0x052D, Valid, "", Unspecified),
    (0x052E, 0x052E, Mapped, "\u{52F}", Unspecified),
    (0x052F, 0x052F, Valid, "", Unspecified),
    (0x0530, 0x0530, Disallowed, "", Unspecified),
    (0x0531, 0x0531, Mapped, "\u{561}", Unspecified),
    (0x0532, 0x0532, Mapped, "\u{562}", Unspecified),
    (0x0533, 0x0533, Mapped, "\u{563}", Unspecified),
    (0x0534, 0x0534, Mapped, "\u{564}", Unspecified),
    (0x0535, 0x0535, Mapped, "\u{565}", Unspecified),
    (0x0536, 0x0536, Mapped, "\u{566}", Unspecified),
    (0x0537, 0x0537, Mapped, "\u{567}", Unspecified),
    (0x0538, 0x0538, Mapped, "\u{568}", Unspecified),
    (0x0539, 0x0539, Mapped, "\u{569}", Unspecified),
    (0x053A, 0x053A, Mapped, "\u{56A}", Unspecified),
    (0x053B, 0x053B, Mapped, "\u{56B}", Unspecified),
    (0x053C, 0x053C, Mapped, "\u{56C}", Unspecified),
    (0x053D, 0x053D, Mapped, "\u{56D}", Unspecified),
    (0x053E, 0x053E, Mapped, "\u{56E}", Unspecified),
    (0x053F, 0x053F, Mapped, "\u{56F}", Unspecified),
    (0x0540, 0x0540, Mapped, "\u{570}", Unspecified),
    (0x0541, 0x0541, Mapped, "\u{571}", Unspecified),
    (0x0542, 0x0542, Mapped, "\u{572}", Unspecified),
    (0x0543, 0x0543, Mapped, "\u{573}", Unspecified),
    (0x0544, 0x0544, Mapped, "\u{574}", Unspecified),
    (0x0545, 0x0545, Mapped, "\u{575}", Unspecified),
    (0x0546, 0x0546, Mapped, "\u{576}", Unspecified),
    (0x0547, 0x0547, Mapped, "\u{577}", Unspecified),
    (0x0548, 0x0548, Mapped, "\u{578}", Unspecified),
    (0x0549, 0x0549, Mapped, "\u{579}", Unspecified),
    (0x054A, 0x054A, Mapped, "\u{57A}", Unspecified),
    (0x054B, 0x054B, Mapped, "\u{57B}", Unspecified),
    (0x054C, 0x054C, Mapped, "\u{57C}", Unspecified),
    (0x054D, 0x054D, Mapped, "\u{57D}", Unspecified),
    (0x054E, 0x054E, Mapped, "\u{57E}", Unspecified),
    (0x054F, 0x054F, Mapped, "\u{57F}", Unspecified),
    (0x0550, 0x0550, Mapped, "\u{580}", Unspecified),
    (0x0551, 0x0551, Mapped, "\u{581}", Unspecified),
    (0x0552, 0x0552, Mapped, "\u{582}", Unspecified),
    (0x0553, 0x0553, Mapped, "\u{583}", Unspecified),
    (0x0554, 0x0554, Mapped, "\u{584}", Unspecified),
    (0x0555, 0x0555, Mapped, "\u{585}", Unspecified),
    (0x0556, 0x0556, Mapped, "\u{586}", Unspecified),
    (0x0557, 0x0558, Disallowed, "", Unspecified),
    (0x0559, 0x0559, Valid, "", Unspecified),
    (0x055A, 0x055F, Valid, "", Nv8),
    (0x0560, 0x0586, Valid, "", Unspecified),
    (0x0587, 0x0587, Mapped, "\u{565}\u{582}", Unspecified),
    (0x0588, 0x0588, Valid, "", Unspecified),
    (0x0589, 0x058A, Valid, "", Nv8),
    (0x058B, 0x058C, Disallowed, "", Unspecified),
    (0x058D, 0x058F, Valid, "", Nv8),
    (0x0590, 0x0590, Disallowed, "", Unspecified),
    (0x0591, 0x05BD, Valid, "", Unspecified),
    (0x05BE, 0x05BE, Valid, "", Nv8),
    (0x05BF, 0x05BF, Valid, "", Unspecified),
    (0x05C0, 0x05C0, Valid, "", Nv8),
    (0x05C1, 0x05C2, Valid, "", Unspecified),
    (0x05C3, 0x05C3, Valid, "", Nv8),
    (0x05C4, 0x05C5, Valid, "", Unspecified),
    (0x05C6, 0x05C6, Valid, "", Nv8),
    (0x05C7, 0x05C7, Valid, "", Unspecified),
    (0x05C8, 0x05CF, Disallowed, "", Unspecified),
    (0x05D0, 0x05EA, Valid, "", Unspecified),
    (0x05EB, 0x05EE, Disallowed, "", Unspecified),
    (0x05EF, 0x05F4, Valid, "", Unspecified),
    (0x05F5, 0x0605, Disallowed, "", Unspecified),
    (0x0606, 0x060F, Valid, "", Nv8),
    (0x0610, 0x061A, Valid, "", Unspecified),
    (0x061B, 0x061B, Valid, "", Nv8),
    (0x061C, 0x061D, Disallowed, "", Unspecified),
    (0x061E, 0x061F, Valid, "", Nv8),
    (0x0620, 0x063F, Valid, "", Unspecified),
    (0x0640, 0x0640, Valid, "", Nv8),
    (0x0641, 0x0669, Valid, "", Unspecified),
    (0x066A, 0x066D, Valid, "", Nv8),
    (0x066E, 0x0674, Valid, "", Unspecified),
    (0x0675, 0x0675, Mapped, "\u{627}\u{674}", Unspecified),
    (0x0676, 0x0676, Mapped, "\u{648}\u{674}", Unspecified),
    (0x0677, 0x0677, Mapped, "\u{6C7}\u{674}", Unspecified),
    (0x0678, 0x0678, Mapped, "\u{64A}\u{674}", Unspecified),
    (0x0679, 0x06D3, Valid, "", Unspecified),
    (0x06D4, 0x06D4, Valid, "", Nv8),
    (0x06D5, 0x06DC, Valid, "", Unspecified),
    (0x06DD, 0x06DD, Disallowed, "", Unspecified),
    (0x06DE, 0x06DE, Valid, "", Nv8),
    (0x06DF, 0x06E8, Valid, "", Unspecified),
    (0x06E9, 0x06E9, Valid, "", Nv8),
    (0x06EA, 0x06FF, Valid, "", Unspecified),
    (0x0700, 0x070D, Valid, "", Nv8),
    (0x070E, 0x070F, Disallowed, "", Unspecified),
    (0x0710, 0x074A, Valid, "", Unspecified),
    (0x074B, 0x074C, Disallowed, "", Unspecified),
    (0x074D, 0x07B1, Valid, "", Unspecified),
    (0x07B2, 0x07BF, Disallowed, "", Unspecified),
    (0x07C0, 0x07F5, Valid, "", Unspecified),
    (0x07F6, 0x07FA, Valid, "", Nv8),
    (0x07FB, 0x07FC, Disallowed, "", Unspecified),
    (0x07FD, 0x07FD, Valid, "", Unspecified),
    (0x07FE, 0x07FF, Valid, "", Nv8),
    (0x0800, 0x082D, Valid, "", Unspecified),
    (0x082E, 0x082F, Disallowed, "", Unspecified),
    (0x0830, 0x083E, Valid, "", Nv8),
    (0x083F, 0x083F, Disallowed, "", Unspecified),
    (0x0840, 0x085B, Valid, "", Unspecified),
    (0x085C, 0x085D, Disallowed, "", Unspecified),
    (0x085E, 0x085E, Valid, "", Nv8),
    (0x085F, 0x085F, Disallowed, "", Unspecified),
    (0x0860, 0x086A, Valid, "", Unspecified),
    (0x086B, 0x089F, Disallowed, "", Unspecified),
    (0x08A0, 0x08B4, Valid, "", Unspecified),
    (0x08B5, 0x08B5, Disallowed, "", Unspecified),
    (0x08B6, 0x08C7, Valid, "", Unspecified),
    (0x08C8, 0x08D2, Disallowed, "", Unspecified),
    (0x08D3, 0x08E1, Valid, "", Unspecified),
    (0x08E2, 0x08E2, Disallowed, "", Unspecified),
    (0x08E3, 0x0957, Valid, "", Unspecified),
    (0x0958, 0x0958, Mapped, "\u{915}\u{93C}", Unspecified),
    (0x0959, 0x0959, Mapped, "\u{916}\u{93C}", Unspecified),
    (0x095A, 0x095A, Mapped, "\u{917}\u{93C}", Unspecified),
    (0x095B, 0x095B, Mapped, "\u{91C}\u{93C}", Unspecified),
    (0x095C, 0x095C, Mapped, "\u{921}\u{93C}", Unspecified),
    (0x095D, 0x095D, Mapped, "\u{922}\u{93C}", Unspecified),
    (0x095E, 0x095E, Mapped, "\u{92B}\u{93C}", Unspecified),
    (0x095F, 0x095F, Mapped, "\u{92F}\u{93C}", Unspecified),
    (0x0960, 0x0963, Valid, "", Unspecified),
    (0x0964, 0x0965, Valid, "", Nv8),
    (0x0966, 0x096F, Valid, "", Unspecified),
    (0x0970, 0x0970, Valid, "", Nv8),
    (0x0971, 0x0983, Valid, "", Unspecified),
    (0x0984, 0x0984, Disallowed, "", Unspecified),
    (0x0985, 0x098C, Valid, "", Unspecified),
    (0x098D, 0x098E, Disallowed, "", Unspecified),
    (0x098F, 0x0990, Valid, "", Unspecified),
    (0x0991, 0x0992, Disallowed, "", Unspecified),
    (0x0993, 0x09A8, Valid, "", Unspecified),
    (0x09A9, 0x09A9, Disallowed, "", Unspecified),
    (0x09AA, 0x09B0, Valid, "", Unspecified),
    (0x09B1, 0x09B1, Disallowed, "", Unspecified),
    (0x09B2, 0x09B2, Valid, "", Unspecified),
    (0x09B3, 0x09B5, Disallowed, "", Unspecified),
    (0x09B6, 0x09B9, Valid, "", Unspecified),
    (0x09BA, 0x09BB, Disallowed, "", Unspecified),
    (0x09BC, 0x09C4, Valid, "", Unspecified),
    (0x09C5, 0x09C6, Disallowed, "", Unspecified),
    (0x09C7, 0x09C8, Valid, "", Unspecified),
    (0x09C9, 0x09CA, Disallowed, "", Unspecified),
    (0x09CB, 0x09CE, Valid, "", Unspecified),
    (0x09CF, 0x09D6, Disallowed, "", Unspecified),
    (0x09D7, 0x09D7, Valid, "", Unspecified),
    (0x09D8, 0x09DB, Disallowed, "", Unspecified),
    (0x09DC, 0x09DC, Mapped, "\u{9A1}\u{9BC}", Unspecified),
    (0x09DD, 0x09DD, Mapped, "\u{9A2}\u{9BC}", Unspecified),
    (0x09DE, 0x09DE, Disallowed, "", Unspecified),
    (0x09DF, 0x09DF, Mapped, "\u{9AF}\u{9BC}", Unspecified),
    (0x09E0, 0x09E3, Valid, "", Unspecified),
    (0x09E4, 0x09E5, Disallowed, "", Unspecified),
    (0x09E6, 0x09F1, Valid, "", Unspecified),
    (0x09F2, 0x09FB, Valid, "", Nv8),
    (0x09FC, 0x09FC, Valid, "", Unspecified),
    (0x09FD, 0x09FD, Valid, "", Nv8),
    (0x09FE, 0x09FE, Valid, "", Unspecified),
    (0x09FF, 0x0A00, Disallowed, "", Unspecified),
    (0x0A01, 0x0A03, Valid, "", Unspecified),
    (0x0A04, 0x0A04, Disallowed, "", Unspecified),
    (0x0A05, 0x0A0A, Valid, "", Unspecified),
    (0x0A0B, 0x0A0E, Disallowed, "", Unspecified),
    (0x0A0F, 0x0A10, Valid, "", Unspecified),
    (0x0A11, 0x0A12, Disallowed, "", Unspecified),
    (0x0A13, 0x0A28, Valid, "", Unspecified),
    (0x0A29, 0x0A29, Disallowed, "", Unspecified),
    (0x0A2A, 0x0A30, Valid, "", Unspecified),
    (0x0A31, 0x0A31, Disallowed, "", Unspecified),
    (0x0A32, 0x0A32, Valid, "", Unspecified),
    (0x0A33, 0x0A33, Mapped, "\u{A32}\u{A3C}", Unspecified),
    (0x0A34, 0x0A34, Disallowed, "", Unspecified),
    (0x0A35, 0x0A35, Valid, "", Unspecified),
    (0x0A36, 0x0A36, Mapped, "\u{A38}\u{A3C}", Unspecified),
    (0x0A37, 0x0A37, Disallowed, "", Unspecified),
    (0x0A38, 0x0A39, Valid, "", Unspecified),
    (0x0A3A, 0x0A3B, Disallowed, "", Unspecified),
    (0x0A3C, 0x0A3C, Valid, "", Unspecified),
    (0x0A3D, 0x0A3D, Disallowed, "", Unspecified),
    (0x0A3E, 0x0A42, Valid, "", Unspecified),
    (0x0A43, 0x0A46, Disallowed, "", Unspecified),
    (0x0A47, 0x0A48, Valid, "", Unspecified),
    (0x0A49, 0x0A4A, Disallowed, "", Unspecified),
    (0x0A4B, 0x0A4D, Valid, "", Unspecified),
    (0x0A4E, 0x0A50, Disallowed, "", Unspecified),
    (0x0A51, 0x0A51, Valid, "", Unspecified),
    (0x0A52, 0x0A58, Disallowed, "", Unspecified),
    (0x0A59, 0x0A59, Mapped, "\u{A16}\u{A3C}", Unspecified),
    (0x0A5A, 0x0A5A, Mapped, "\u{A17}\u{A3C}", Unspecified),
    (0x0A5B, 0x0A5B, Mapped, "\u{A1C}\u{A3C}", Unspecified),
    (0x0A5C, 0x0A5C, Valid, "", Unspecified),
    (0x0A5D, 0x0A5D, Disallowed, "", Unspecified),
    (0x0A5E, 0x0A5E, Mapped, "\u{A2B}\u{A3C}", Unspecified),
    (0x0A5F, 0x0A65, Disallowed, "", Unspecified),
    (0x0A66, 0x0A75, Valid, "", Unspecified),
    (0x0A76, 0x0A76, Valid, "", Nv8),
    (0x0A77, 0x0A80, Disallowed, "", Unspecified),
    (0x0A81, 0x0A83, Valid, "", Unspecified),
    (0x0A84, 0x0A84, Disallowed, "", Unspecified),
    (0x0A85, 0x0A8D, Valid, "", Unspecified),
    (0x0A8E, 0x0A8E, Disallowed, "", Unspecified),
    (0x0A8F, 0x0A91, Valid, "", Unspecified),
    (0x0A92, 0x0A92, Disallowed, "", Unspecified),
    (0x0A93, 0x0AA8, Valid, "", Unspecified),
    (0x0AA9, 0x0AA9, Disallowed, "", Unspecified),
    (0x0AAA, 0x0AB0, Valid, "", Unspecified),
    (0x0AB1, 0x0AB1, Disallowed, "", Unspecified),
    (0x0AB2, 0x0AB3, Valid, "", Unspecified),
    (0x0AB4, 0x0AB4, Disallowed, "", Unspecified),
    (0x0AB5, 0x0AB9, Valid, "", Unspecified),
    (0x0ABA, 0x0ABB, Disallowed, "", Unspecified),
    (0x0ABC, 0x0AC5, Valid, "", Unspecified),
    (0x0AC6, 0x0AC6, Disallowed, "", Unspecified),
    (0x0AC7, 0x0AC9, Valid, "", Unspecified),
    (0x0ACA, 0x0ACA, Disallowed, "", Unspecified),
    (0x0ACB, 0x0ACD, Valid, "", Unspecified),
    (0x0ACE, 0x0ACF, Disallowed, "", Unspecified),
    (0x0AD0, 0x0AD0, Valid, "", Unspecified),
    (0x0AD1, 0x0ADF, Disallowed, "", Unspecified),
    (0x0AE0, 0x0AE3, Valid, "", Unspecified),
    (0x0AE4, 0x0AE5, Disallowed, "", Unspecified),
    (0x0AE6, 0x0AEF, Valid, "", Unspecified),
    (0x0AF0, 0x0AF1, Valid, "", Nv8),
    (0x0AF2, 0x0AF8, Disallowed, "", Unspecified),
    (0x0AF9, 0x0AFF, Valid, "", Unspecified),
    (0x0B00, 0x0B00, Disallowed, "", Unspecified),
    (0x0B01, 0x0B03, Valid, "", Unspecified),
    (0x0B04, 0x0B04, Disallowed, "", Unspecified),
    (0x0B05, 0x0B0C, Valid, "", Unspecified),
    (0x0B0D, 0x0B0E, Disallowed, "", Unspecified),
    (0x0B0F, 0x0B10, Valid, "", Unspecified),
    (0x0B11, 0x0B12, Disallowed, "", Unspecified),
    (0x0B13, 0x0B28, Valid, "", Unspecified),
    (0x0B29, 0x0B29, Disallowed, "", Unspecified),
    (0x0B2A, 0x0B30, Valid, "", Unspecified),
    (0x0B31, 0x0B31, Disallowed, "", Unspecified),
    (0x0B32, 0x0B33, Valid, "", Unspecified),
    (0x0B34, 0x0B34, Disallowed, "", Unspecified),
    (0x0B35, 0x0B39, Valid, "", Unspecified),
    (0x0B3A, 0x0B3B, Disallowed, "", Unspecified),
    (0x0B3C, 0x0B44, Valid, "", Unspecified),
    (0x0B45, 0x0B46, Disallowed, "", Unspecified),
    (0x0B47, 0x0B48, Valid, "", Unspecified),
    (0x0B49, 0x0B4A, Disallowed, "", Unspecified),
    (0x0B4B, 0x0B4D, Valid, "", Unspecified),
    (0x0B4E, 0x0B54, Disallowed, "", Unspecified),
    (0x0B55, 0x0B57, Valid, "", Unspecified),
    (0x0B58, 0x0B5B, Disallowed, "", Unspecified),
    (0x0B5C, 0x0B5C, Mapped, "\u{B21}\u{B3C}", Unspecified),
    (0x0B5D, 0x0B5D, Mapped, "\u{B22}\u{B3C}", Unspecified),
    (0x0B5E, 0x0B5E, Disallowed, "", Unspecified),
    (0x0B5F, 0x0B63, Valid, "", Unspecified),
    (0x0B64, 0x0B65, Disallowed, "", Unspecified),
    (0x0B66, 0x0B6F, Valid, "", Unspecified),
    (0x0B70, 0x0B70, Valid, "", Nv8),
    (0x0B71, 0x0B71, Valid, "", Unspecified),
    (0x0B72, 0x0B77, Valid, "", Nv8),
    (0x0B78, 0x0B81, Disallowed, "", Unspecified),
    (0x0B82, 0x0B83, Valid, "", Unspecified),
    (0x0B84, 0x0B84, Disallowed, "", Unspecified),
    (0x0B85, 0x0B8A, Valid, "", Unspecified),
    (0x0B8B, 0x0B8D, Disallowed, "", Unspecified),
    (0x0B8E, 0x0B90, Valid, "", Unspecified),
    (0x0B91, 0x0B91, Disallowed, "", Unspecified),
    (0x0B92, 0x0B95, Valid, "", Unspecified),
    (0x0B96, 0x0B98, Disallowed, "", Unspecified),
    (0x0B99, 0x0B9A, Valid, "", Unspecified),
    (0x0B9B, 0x0B9B, Disallowed, "", Unspecified),
    (0x0B9C, 0x0B9C, Valid, "", Unspecified),
    (0x0B9D, 0x0B9D, Disallowed, "", Unspecified),
    (0x0B9E, 0x0B9F, Valid, "", Unspecified),
    (0x0BA0, 0x0BA2, Disallowed, "", Unspecified),
    (0x0BA3, 0x0BA4, Valid, "", Unspecified),
    (0x0BA5, 0x0BA7, Disallowed, "", Unspecified),
    (0x0BA8, 0x0BAA, Valid, "", Unspecified),
    (0x0BAB, 0x0BAD, Disallowed, "", Unspecified),
    (0x0BAE, 0x0BB9, Valid, "", Unspecified),
    (0x0BBA, 0x0BBD, Disallowed, "", Unspecified),
    (0x0BBE, 0x0BC2, Valid, "", Unspecified),
    (0x0BC3, 0x0BC5, Disallowed, "", Unspecified),
    (0x0BC6, 0x0BC8, Valid, "", Unspecified),
    (0x0BC9, 0x0BC9, Disallowed, "", Unspecified),
    (0x0BCA, 0x0BCD, Valid, "", Unspecified),
    (0x0BCE, 0x0BCF, Disallowed, "", Unspecified),
    (0x0BD0, 0x0BD0, Valid, "", Unspecified),
    (0x0BD1, 0x0BD6, Disallowed, "", Unspecified),
    (0x0BD7, 0x0BD7, Valid, "", Unspecified),
    (0x0BD8, 0x0BE5, Disallowed, "", Unspecified),
    (0x0BE6, 0x0BEF, Valid, "", Unspecified),
    (0x0BF0, 0x0BFA, Valid, "", Nv8),
    (0x0BFB, 0x0BFF, Disallowed, "", Unspecified),
    (0x0C00, 0x0C0C, Valid, "", Unspecified),
    (0x0C0D, 0x0C0D, Disallowed, "", Unspecified),
    (0x0C0E, 0x0C10, Valid, "", Unspecified),
    (0x0C11, 0x0C11, Disallowed, "", Unspecified),
    (0x0C12, 0x0C28, Valid, "", Unspecified),
    (0x0C29, 0x0C29, Disallowed, "", Unspecified),
    (0x0C2A, 0x0C39, Valid, "", Unspecified),
    (0x0C3A, 0x0C3C, Disallowed, "", Unspecified),
    (0x0C3D, 0x0C44, Valid, "", Unspecified),
    (0x0C45, 0x0C45, Disallowed, "", Unspecified),
    (0x0C46, 0x0C48, Valid, "", Unspecified),
    (0x0C49, 0x0C49, Disallowed, "", Unspecified),
    (0x0C4A, 0x0C4D, Valid, "", Unspecified),
    (0x0C4E, 0x0C54, Disallowed, "", Unspecified),
    (0x0C55, 0x0C56, Valid, "", Unspecified),
    (0x0C57, 0x0C57, Disallowed, "", Unspecified),
    (0x0C58, 0x0C5A, Valid, "", Unspecified),
    (0x0C5B, 0x0C5F, Disallowed, "", Unspecified),
    (0x0C60, 0x0C63, Valid, "", Unspecified),
    (0x0C64, 0x0C65, Disallowed, "", Unspecified),
    (0x0C66, 0x0C6F, Valid, "", Unspecified),
    (0x0C70, 0x0C76, Disallowed, "", Unspecified),
    (0x0C77, 0x0C7F, Valid, "", Nv8),
    (0x0C80, 0x0C83, Valid, "", Unspecified),
    (0x0C84, 0x0C84, Valid, "", Nv8),
    (0x0C85, 0x0C8C, Valid, "", Unspecified),
    (0x0C8D, 0x0C8D, Disallowed, "", Unspecified),
    (0x0C8E, 0x0C90, Valid, "", Unspecified),
    (0x0C91, 0x0C91, Disallowed, "", Unspecified),
    (0x0C92, 0x0CA8, Valid, "", Unspecified),
    (0x0CA9, 0x0CA9, Disallowed, "", Unspecified),
    (0x0CAA, 0x0CB3, Valid, "", Unspecified),
    (0x0CB4, 0x0CB4, Disallowed, "", Unspecified),
    (0x0CB5, 0x0CB9, Valid, "", Unspecified),
    (0x0CBA, 0x0CBB, Disallowed, "", Unspecified),
    (0x0CBC, 0x0CC4, Valid, "", Unspecified),
    (0x0CC5, 0x0CC5, Disallowed, "", Unspecified),
    (0x0CC6, 0x0CC8, Valid, "", Unspecified),
    (0x0CC9, 0x0CC9, Disallowed, "", Unspecified),
    (0x0CCA, 0x0CCD, Valid, "", Unspecified),
    (0x0CCE, 0x0CD4, Disallowed, "", Unspecified),
    (0x0CD5, 0x0CD6, Valid, "", Unspecified),
    (0x0CD7, 0x0CDD, Disallowed, "", Unspecified),
    (0x0CDE, 0x0CDE, Valid, "", Unspecified),
    (0x0CDF, 0x0CDF, Disallowed, "", Unspecified),
    (0x0CE0, 0x0CE3, Valid, "", Unspecified),
    (0x0CE4, 0x0CE5, Disallowed, "", Unspecified),
    (0x0CE6, 0x0CEF, Valid, "", Unspecified),
    (0x0CF0, 0x0CF0, Disallowed, "", Unspecified),
    (0x0CF1, 0x0CF2, Valid, "", Unspecified),
    (0x0CF3, 0x0CFF, Disallowed, "", Unspecified),
    (0x0D00, 0x0D0C, Valid, "", Unspecified),
    (0x0D0D, 0x0D0D, Disallowed, "", Unspecified),
    (0x0D0E, 0x0D10, Valid, "", Unspecified),
    (0x0D11, 0x0D11, Disallowed, "", Unspecified),
    (0x0D12, 0x0D44, Valid, "", Unspecified),
    (0x0D45, 0x0D45, Disallowed, "", Unspecified),
    (0x0D46, 0x0D48, Valid, "", Unspecified),
    (0x0D49, 0x0D49, Disallowed, "", Unspecified),
    (0x0D4A, 0x0D4E, Valid, "", Unspecified),
    (0x0D4F, 0x0D4F, Valid, "", Nv8),
    (0x0D50, 0x0D53, Disallowed, "", Unspecified),
    (0x0D54, 0x0D57, Valid, "", Unspecified),
    (0x0D58, 0x0D5E, Valid, "", Nv8),
    (0x0D5F, 0x0D63, Valid, "", Unspecified),
    (0x0D64, 0x0D65, Disallowed, "", Unspecified),
    (0x0D66, 0x0D6F, Valid, "", Unspecified),
    (0x0D70, 0x0D79, Valid, "", Nv8),
    (0x0D7A, 0x0D7F, Valid, "", Unspecified),
    (0x0D80, 0x0D80, Disallowed, "", Unspecified),
    (0x0D81, 0x0D83, Valid, "", Unspecified),
    (0x0D84, 0x0D84, Disallowed, "", Unspecified),
    (0x0D85, 0x0D96, Valid, "", Unspecified),
    (0x0D97, 0x0D99, Disallowed, "", Unspecified),
    (0x0D9A, 0x0DB1, Valid, "", Unspecified),
    (0x0DB2, 0x0DB2, Disallowed, "", Unspecified),
    (0x0DB3, 0x0DBB, Valid, "", Unspecified),
    (0x0DBC, 0x0DBC, Disallowed, "", Unspecified),
    (0x0DBD, 0x0DBD, Valid, "", Unspecified),
    (0x0DBE, 0x0DBF, Disallowed, "", Unspecified),
    (0x0DC0, 0x0DC6, Valid, "", Unspecified),
    (0x0DC7, 0x0DC9, Disallowed, "", Unspecified),
    (0x0DCA, 0x0DCA, Valid, "", Unspecified),
    (0x0DCB, 0x0DCE, Disallowed, "", Unspecified),
    (0x0DCF, 0x0DD4, Valid, "", Unspecified),
    (0x0DD5, 0x0DD5, Disallowed, "", Unspecified),
    (0x0DD6, 0x0DD6, Valid, "", Unspecified),
    (0x0DD7, 0x0DD7, Disallowed, "", Unspecified),
    (0x0DD8, 0x0DDF, Valid, "", Unspecified),
    (0x0DE0, 0x0DE5, Disallowed, "", Unspecified),
    (0x0DE6, 0x0DEF, Valid, "", Unspecified),
    (0x0DF0, 0x0DF1, Disallowed, "", Unspecified),
    (0x0DF2, 0x0DF3, Valid, "", Unspecified),
    (0x0DF4, 0x0DF4, Valid, "", Nv8),
    (0x0DF5, 0x0E00, Disallowed, "", Unspecified),
    (0x0E01, 0x0E32, Valid, "", Unspecified),
    (0x0E33, 0x0E33, Mapped, "\u{E4D}\u{E32}", Unspecified),
    (0x0E34, 0x0E3A, Valid, "", Unspecified),
    (0x0E3B, 0x0E3E, Disallowed, "", Unspecified),
    (0x0E3F, 0x0E3F, Valid, "", Nv8),
    (0x0E40, 0x0E4E, Valid, "", Unspecified),
    (0x0E4F, 0x0E4F, Valid, "", Nv8),
    (0x0E50, 0x0E59, Valid, "", Unspecified),
    (0x0E5A, 0x0E5B, Valid, "", Nv8),
    (0x0E5C, 0x0E80, Disallowed, "", Unspecified),
    (0x0E81, 0x0E82, Valid, "", Unspecified),
    (0x0E83, 0x0E83, Disallowed, "", Unspecified),
    (0x0E84, 0x0E84, Valid, "", Unspecified),
    (0x0E85, 0x0E85, Disallowed, "", Unspecified),
    (0x0E86, 0x0E8A, Valid, "", Unspecified),
    (0x0E8B, 0x0E8B, Disallowed, "", Unspecified),
    (0x0E8C, 0x0EA3, Valid, "", Unspecified),
    (0x0EA4, 0x0EA4, Disallowed, "", Unspecified),
    (0x0EA5, 0x0EA5, Valid, "", Unspecified),
    (0x0EA6, 0x0EA6, Disallowed, "", Unspecified),
    (0x0EA7, 0x0EB2, Valid, "", Unspecified),
    (0x0EB3, 0x0EB3, Mapped, "\u{ECD}\u{EB2}", Unspecified),
    (0x0EB4, 0x0EBD, Valid, "", Unspecified),
    (0x0EBE, 0x0EBF, Disallowed, "", Unspecified),
    (0x0EC0, 0x0EC4, Valid, "", Unspecified),
    (0x0EC5, 0x0EC5, Disallowed, "", Unspecified),
    (0x0EC6, 0x0EC6, Valid, "", Unspecified),
    (0x0EC7, 0x0EC7, Disallowed, "", Unspecified),
    (0x0EC8, 0x0ECD, Valid, "", Unspecified),
    (0x0ECE, 0x0ECF, Disallowed, "", Unspecified),
    (0x0ED0, 0x0ED9, Valid, "", Unspecified),
    (0x0EDA, 0x0EDB, Disallowed, "", Unspecified),
    (0x0EDC, 0x0EDC, Mapped, "\u{EAB}\u{E99}", Unspecified),
    (0x0EDD, 0x0EDD, Mapped, "\u{EAB}\u{EA1}", Unspecified),
    (0x0EDE, 0x0EDF, Valid, "", Unspecified),
    (0x0EE0, 0x0EFF, Disallowed, "", Unspecified),
    (0x0F00, 0x0F00, Valid, "", Unspecified),
    (0x0F01, 0x0F0A, Valid, "", Nv8),
    (0x0F0B, 0x0F0B, Valid, "", Unspecified),
    (0x0F0C, 0x0F0C, Mapped, "\u{F0B}", Unspecified),
    (0x0F0D, 0x0F17, Valid, "", Nv8),
    (0x0F18, 0x0F19, Valid, "", Unspecified),
    (0x0F1A, 0x0F1F, Valid, "", Nv8),
    (0x0F20, 0x0F29, Valid, "", Unspecified),
    (0x0F2A, 0x0F34, Valid, "", Nv8),
    (0x0F35, 0x0F35, Valid, "", Unspecified),
    (0x0F36, 0x0F36, Valid, "", Nv8),
    (0x0F37, 0x0F37, Valid, "", Unspecified),
    (0x0F38, 0x0F38, Valid, "", Nv8),
    (0x0F39, 0x0F39, Valid, "", Unspecified),
    (0x0F3A, 0x0F3D, Valid, "", Nv8),
    (0x0F3E, 0x0F42, Valid, "", Unspecified),
    (0x0F43, 0x0F43, Mapped, "\u{F42}\u{FB7}", Unspecified),
    (0x0F44, 0x0F47, Valid, "", Unspecified),
    (0x0F48, 0x0F48, Disallowed, "", Unspecified),
    (0x0F49, 0x0F4C, Valid, "", Unspecified),
    (0x0F4D, 0x0F4D, Mapped, "\u{F4C}\u{FB7}", Unspecified),
    (0x0F4E, 0x0F51, Valid, "", Unspecified),
    (0x0F52, 0x0F52, Mapped, "\u{F51}\u{FB7}", Unspecified),
    (0x0F53, 0x0F56, Valid, "", Unspecified),
    (0x0F57, 0x0F57, Mapped, "\u{F56}\u{FB7}", Unspecified),
    (0x0F58, 0x0F5B, Valid, "", Unspecified),
    (0x0F5C, 0x0F5C, Mapped, "\u{F5B}\u{FB7}", Unspecified),
    (0x0F5D, 0x0F68, Valid, "", Unspecified),
    (0x0F69, 0x0F69, Mapped, "\u{F40}\u{FB5}", Unspecified),
    (0x0F6A, 0x0F6C, Valid, "", Unspecified),
    (0x0F6D, 0x0F70, Disallowed, "", Unspecified),
    (0x0F71, 0x0F72, Valid, "", Unspecified),
    (0x0F73, 0x0F73, Mapped, "\u{F71}\u{F72}", Unspecified),
    (0x0F74, 0x0F74, Valid, "", Unspecified),
    (0x0F75, 0x0F75, Mapped, "\u{F71}\u{F74}", Unspecified),
    (0x0F76, 0x0F76, Mapped, "\u{FB2}\u{F80}", Unspecified),
    (0x0F77, 0x0F77, Mapped, "\u{FB2}\u{F71}\u{F80}", Unspecified),
    (0x0F78, 0x0F78, Mapped, "\u{FB3}\u{F80}", Unspecified),
    (0x0F79, 0x0F79, Mapped, "\u{FB3}\u{F71}\u{F80}", Unspecified),
    (0x0F7A, 0x0F80, Valid, "", Unspecified),
    (0x0F81, 0x0F81, Mapped, "\u{F71}\u{F80}", Unspecified),
    (0x0F82, 0x0F84, Valid, "", Unspecified),
    (0x0F85, 0x0F85, Valid, "", Nv8),
    (0x0F86, 0x0F92, Valid, "", Unspecified),
    (0x0F93, 0x0F93, Mapped, "\u{F92}\u{FB7}", Unspecified),
    (0x0F94, 0x0F97, Valid, "", Unspecified),
    (0x0F98, 0x0F98, Disallowed, "", Unspecified),
    (0x0F99, 0x0F9C, Valid, "", Unspecified),
    (0x0F9D, 0x0F9D, Mapped, "\u{F9C}\u{FB7}", Unspecified),
    (0x0F9E, 0x0FA1, Valid, "", Unspecified),
    (0x0FA2, 0x0FA2, Mapped, "\u{FA1}\u{FB7}", Unspecified),
    (0x0FA3, 0x0FA6, Valid, "", Unspecified),
    (0x0FA7, 0x0FA7, Mapped, "\u{FA6}\u{FB7}", Unspecified),
    (0x0FA8, 0x0FAB, Valid, "", Unspecified),
    (0x0FAC, 0x0FAC, Mapped, "\u{FAB}\u{FB7}", Unspecified),
    (0x0FAD, 0x0FB8, Valid, "", Unspecified),
    (0x0FB9, 0x0FB9, Mapped, "\u{F90}\u{FB5}", Unspecified),
    (0x0FBA, 0x0FBC, Valid, "", Unspecified),
    (0x0FBD, 0x0FBD, Disallowed, "", Unspecified),
    (0x0FBE, 0x0FC5, Valid, "", Nv8),
    (0x0FC6, 0x0FC6, Valid, "", Unspecified),
    (0x0FC7, 0x0FCC, Valid, "", Nv8),
    (0x0FCD, 0x0FCD, Disallowed, "", Unspecified),
    (0x0FCE, 0x0FDA, Valid, "", Nv8),
    (0x0FDB, 0x0FFF, Disallowed, "", Unspecified),
    (0x1000, 0x1049, Valid, "", Unspecified),
    (0x104A, 0x104F, Valid, "", Nv8),
    (0x1050, 0x109D, Valid, "", Unspecified),
    (0x109E, 0x109F, Valid, "", Nv8),
    (0x10A0, 0x10C6, Disallowed, "", Unspecified),
    (0x10C7, 0x10C7, Mapped, "\u{2D27}", Unspecified),
    (0x10C8, 0x10CC, Disallowed, "", Unspecified),
    (0x10CD, 0x10CD, Mapped, "\u{2D2D}", Unspecified),
    (0x10CE, 0x10CF, Disallowed, "", Unspecified),
    (0x10D0, 0x10FA, Valid, "", Unspecified),
    (0x10FB, 0x10FB, Valid, "", Nv8),
    (0x10FC, 0x10FC, Mapped, "\u{10DC}", Unspecified),
    (0x10FD, 0x10FF, Valid, "", Unspecified),
    (0x1100, 0x115E, Valid, "", Nv8),
    (0x115F, 0x1160, Disallowed, "", Unspecified),
    (0x1161, 0x11FF, Valid, "", Nv8),
    (0x1200, 0x1248, Valid, "", Unspecified),
    (0x1249, 0x1249, Disallowed, "", Unspecified),
    (0x124A, 0x124D, Valid, "", Unspecified),
    (0x124E, 0x124F, Disallowed, "", Unspecified),
    (0x1250, 0x1256, Valid, "", Unspecified),
    (0x1257, 0x1257, Disallowed, "", Unspecified),
    (0x1258, 0x1258, Valid, "", Unspecified),
    (0x1259, 0x1259, Disallowed, "", Unspecified),
    (0x125A, 0x125D, Valid, "", Unspecified),
    (0x125E, 0x125F, Disallowed, "", Unspecified),
    (0x1260, 0x1288, Valid, "", Unspecified),
    (0x1289, 0x1289, Disallowed, "", Unspecified),
    (0x128A, 0x128D, Valid, "", Unspecified),
    (0x128E, 0x128F, Disallowed, "", Unspecified),
    (0x1290, 0x12B0, Valid, "", Unspecified),
    (0x12B1, 0x12B1, Disallowed, "", Unspecified),
    (0x12B2, 0x12B5, Valid, "", Unspecified),
    (0x12B6, 0x12B7, Disallowed, "", Unspecified),
    (0x12B8, 0x12BE, Valid, "", Unspecified),
    (0x12BF, 0x12BF, Disallowed, "", Unspecified),
    (0x12C0, 0x12C0, Valid, "", Unspecified),
    (0x12C1, 0x12C1, Disallowed, "", Unspecified),
    (0x12C2, 0x12C5, Valid, "", Unspecified),
    (0x12C6, 0x12C7, Disallowed, "", Unspecified),
    (0x12C8, 0x12D6, Valid, "", Unspecified),
    (0x12D7, 0x12D7, Disallowed, "", Unspecified),
    (0x12D8, 0x1310, Valid, "", Unspecified),
    (0x1311, 0x1311, Disallowed, "", Unspecified),
    (0x1312, 0x1315, Valid, "", Unspecified),
    (0x1316, 0x1317, Disallowed, "", Unspecified),
    (0x1318, 0x135A, Valid, "", Unspecified),
    (0x135B, 0x135C, Disallowed, "", Unspecified),
    (0x135D, 0x135F, Valid, "", Unspecified),
    (0x1360, 0x137C, Valid, "", Nv8),
    (0x137D, 0x137F, Disallowed, "", Unspecified),
    (0x1380, 0x138F, Valid, "", Unspecified),
    (0x1390, 0x1399, Valid, "", Nv8),
    (0x139A, 0x139F, Disallowed, "", Unspecified),
    (0x13A0, 0x13F5, Valid, "", Unspecified),
    (0x13F6, 0x13F7, Disallowed, "", Unspecified),
    (0x13F8, 0x13F8, Mapped, "\u{13F0}", Unspecified),
    (0x13F9, 0x13F9, Mapped, "\u{13F1}", Unspecified),
    (0x13FA, 0x13FA, Mapped, "\u{13F2}", Unspecified),
    (0x13FB, 0x13FB, Mapped, "\u{13F3}", Unspecified),
    (0x13FC, 0x13FC, Mapped, "\u{13F4}", Unspecified),
    (0x13FD, 0x13FD, Mapped, "\u{13F5}", Unspecified),
    (0x13FE, 0x13FF, Disallowed, "", Unspecified),
    (0x1400, 0x1400, Valid, "", Nv8),
    (0x1401, 0x166C, Valid, "", Unspecified),
    (0x166D, 0x166E, Valid, "", Nv8),
    (0x166F, 0x167F, Valid, "", Unspecified),
    (0x1680, 0x1680, Disallowed, "", Unspecified),
    (0x1681, 0x169A, Valid, "", Unspecified),
    (0x169B, 0x169C, Valid, "", Nv8),
    (0x169D, 0x169F, Disallowed, "", Unspecified),
    (0x16A0, 0x16EA, Valid, "", Unspecified),
    (0x16EB, 0x16F0, Valid, "", Nv8),
    (0x16F1, 0x16F8, Valid, "", Unspecified),
    (0x16F9, 0x16FF, Disallowed, "", Unspecified),
    (0x1700, 0x170C, Valid, "", Unspecified),
    (0x170D, 0x170D, Disallowed, "", Unspecified),
    (0x170E, 0x1714, Valid, "", Unspecified),
    (0x1715, 0x171F, Disallowed, "", Unspecified),
    (0x1720, 0x1734, Valid, "", Unspecified),
    (0x1735, 0x1736, Valid, "", Nv8),
    (0x1737, 0x173F, Disallowed, "", Unspecified),
    (0x1740, 0x1753, Valid, "", Unspecified),
    (0x1754, 0x175F, Disallowed, "", Unspecified),
    (0x1760, 0x176C, Valid, "", Unspecified),
    (0x176D, 0x176D, Disallowed, "", Unspecified),
    (0x176E, 0x1770, Valid, "", Unspecified),
    (0x1771, 0x1771, Disallowed, "", Unspecified),
    (0x1772, 0x1773, Valid, "", Unspecified),
    (0x1774, 0x177F, Disallowed, "", Unspecified),
    (0x1780, 0x17B3, Valid, "", Unspecified),
    (0x17B4, 0x17B5, Disallowed, "", Unspecified),
    (0x17B6, 0x17D3, Valid, "", Unspecified),
    (0x17D4, 0x17D6, Valid, "", Nv8),
    (0x17D7, 0x17D7, Valid, "", Unspecified),
    (0x17D8, 0x17DB, Valid, "", Nv8),
    (0x17DC, 0x17DD, Valid, "", Unspecified),
    (0x17DE, 0x17DF, Disallowed, "", Unspecified),
    (0x17E0, 0x17E9, Valid, "", Unspecified),
    (0x17EA, 0x17EF, Disallowed, "", Unspecified),
    (0x17F0, 0x17F9, Valid, "", Nv8),
    (0x17FA, 0x17FF, Disallowed, "", Unspecified),
    (0x1800, 0x1805, Valid, "", Nv8),
    (0x1806, 0x1806, Disallowed, "", Unspecified),
    (0x1807, 0x180A, Valid, "", Nv8),
    (0x180B, 0x180D, Ignored, "", Unspecified),
    (0x180E, 0x180F, Disallowed, "", Unspecified),
    (0x1810, 0x1819, Valid, "", Unspecified),
    (0x181A, 0x181F, Disallowed, "", Unspecified),
    (0x1820, 0x1878, Valid, "", Unspecified),
    (0x1879, 0x187F, Disallowed, "", Unspecified),
    (0x1880, 0x18AA, Valid, "", Unspecified),
    (0x18AB, 0x18AF, Disallowed, "", Unspecified),
    (0x18B0, 0x18F5, Valid, "", Unspecified),
    (0x18F6, 0x18FF, Disallowed, "", Unspecified),
    (0x1900, 0x191E, Valid, "", Unspecified),
    (0x191F, 0x191F, Disallowed, "", Unspecified),
    (0x1920, 0x192B, Valid, "", Unspecified),
    (0x192C, 0x192F, Disallowed, "", Unspecified),
    (0x1930, 0x193B, Valid, "", Unspecified),
    (0x193C, 0x193F, Disallowed, "", Unspecified),
    (0x1940, 0x1940, Valid, "", Nv8),
    (0x1941, 0x1943, Disallowed, "", Unspecified),
    (0x1944, 0x1945, Valid, "", Nv8),
    (0x1946, 0x196D, Valid, "", Unspecified),
    (0x196E, 0x196F, Disallowed, "", Unspecified),
    (0x1970, 0x1974, Valid, "", Unspecified),
    (0x1975, 0x197F, Disallowed, "", Unspecified),
    (0x1980, 0x19AB, Valid, "", Unspecified),
    (0x19AC, 0x19AF, Disallowed, "", Unspecified),
    (0x19B0, 0x19C9, Valid, "", Unspecified),
    (0x19CA, 0x19CF, Disallowed, "", Unspecified),
    (0x19D0, 0x19D9, Valid, "", Unspecified),
    (0x19DA, 0x19DA, Valid, "", Xv8),
    (0x19DB, 0x19DD, Disallowed, "", Unspecified),
    (0x19DE, 0x19FF, Valid, "", Nv8),
    (0x1A00, 0x1A1B, Valid, "", Unspecified),
    (0x1A1C, 0x1A1D, Disallowed, "", Unspecified),
    (0x1A1E, 0x1A1F, Valid, "", Nv8),
    (0x1A20, 0x1A5E, Valid, "", Unspecified),
    (0x1A5F, 0x1A5F, Disallowed, "", Unspecified),
    (0x1A60, 0x1A7C, Valid, "", Unspecified),
    (0x1A7D, 0x1A7E, Disallowed, "", Unspecified),
    (0x1A7F, 0x1A89, Valid, "", Unspecified),
    (0x1A8A, 0x1A8F, Disallowed, "", Unspecified),
    (0x1A90, 0x1A99, Valid, "", Unspecified),
    (0x1A9A, 0x1A9F, Disallowed, "", Unspecified),
    (0x1AA0, 0x1AA6, Valid, "", Nv8),
    (0x1AA7, 0x1AA7, Valid, "", Unspecified),
    (0x1AA8, 0x1AAD, Valid, "", Nv8),
    (0x1AAE, 0x1AAF, Disallowed, "", Unspecified),
    (0x1AB0, 0x1ABD, Valid, "", Unspecified),
    (0x1ABE, 0x1ABE, Valid, "", Nv8),
    (0x1ABF, 0x1AC0, Valid, "", Unspecified),
    (0x1AC1, 0x1AFF, Disallowed, "", Unspecified),
    (0x1B00, 0x1B4B, Valid, "", Unspecified),
    (0x1B4C, 0x1B4F, Disallowed, "", Unspecified),
    (0x1B50, 0x1B59, Valid, "", Unspecified),
    (0x1B5A, 0x1B6A, Valid, "", Nv8),
    (0x1B6B, 0x1B73, Valid, "", Unspecified),
    (0x1B74, 0x1B7C, Valid, "", Nv8),
    (0x1B7D, 0x1B7F, Disallowed, "", Unspecified),
    (0x1B80, 0x1BF3, Valid, "", Unspecified),
    (0x1BF4, 0x1BFB, Disallowed, "", Unspecified),
    (0x1BFC, 0x1BFF, Valid, "", Nv8),
    (0x1C00, 0x1C37, Valid, "", Unspecified),
    (0x1C38, 0x1C3A, Disallowed, "", Unspecified),
    (0x1C3B, 0x1C3F, Valid, "", Nv8),
    (0x1C40, 0x1C49, Valid, "", Unspecified),
    (0x1C4A, 0x1C4C, Disallowed, "", Unspecified),
    (0x1C4D, 0x1C7D, Valid, "", Unspecified),
    (0x1C7E, 0x1C7F, Valid, "", Nv8),
    (0x1C80, 0x1C80, Mapped, "\u{432}", Unspecified),
    (0x1C81, 0x1C81, Mapped, "\u{434}", Unspecified),
    (0x1C82, 0x1C82, Mapped, "\u{43E}", Unspecified),
    (0x1C83, 0x1C83, Mapped, "\u{441}", Unspecified),
    (0x1C84, 0x1C85, Mapped, "\u{442}", Unspecified),
    (0x1C86, 0x1C86, Mapped, "\u{44A}", Unspecified),
    (0x1C87, 0x1C87, Mapped, "\u{463}", Unspecified),
    (0x1C88, 0x1C88, Mapped, "\u{A64B}", Unspecified),
    (0x1C89, 0x1C8F, Disallowed, "", Unspecified),
    (0x1C90, 0x1C90, Mapped, "\u{10D0}", Unspecified),
    (0x1C91, 0x1C91, Mapped, "\u{10D1}", Unspecified),
    (0x1C92, 0x1C92, Mapped, "\u{10D2}", Unspecified),
    (0x1C93, 0x1C93, Mapped, "\u{10D3}", Unspecified),
    (0x1C94, 0x1C94, Mapped, "\u{10D4}", Unspecified),
    (0x1C95, 0x1C95, Mapped, "\u{10D5}", Unspecified),
    (0x1C96, 0x1C96, Mapped, "\u{10D6}", Unspecified),
    (0x1C97, 0x1C97, Mapped, "\u{10D7}", Unspecified),
    (0x1C98, 0x1C98, Mapped, "\u{10D8}", Unspecified),
    (0x1C99, 0x1C99, Mapped, "\u{10D9}", Unspecified),
    (0x1C9A, 0x1C9A, Mapped, "\u{10DA}", Unspecified),
    (0x1C9B, 0x1C9B, Mapped, "\u{10DB}", Unspecified),
    (0x1C9C, 0x1C9C, Mapped, "\u{10DC}", Unspecified),
    (0x1C9D, 0x1C9D, Mapped, "\u{10DD}", Unspecified),
    (0x1C9E, 0x1C9E, Mapped, "\u{10DE}", Unspecified),
    (0x1C9F, 0x1C9F, Mapped, "\u{10DF}", Unspecified),
    (0x1CA0, 0x1CA0, Mapped, "\u{10E0}", Unspecified),
    (0x1CA1, 0x1CA1, Mapped, "\u{10E1}", Unspecified),
    (0x1CA2, 0x1CA2, Mapped, "\u{10E2}", Unspecified),
    (0x1CA3, 0x1CA3, Mapped, "\u{10E3}", Unspecified),
    (0x1CA4, 0x1CA4, Mapped, "\u{10E4}", Unspecified),
    (0x1CA5, 0x1CA5, Mapped, "\u{10E5}", Unspecified),
    (0x1CA6, 0x1CA6, Mapped, "\u{10E6}", Unspecified),
    (0x1CA7, 0x1CA7, Mapped, "\u{10E7}", Unspecified),
    (0x1CA8, 0x1CA8, Mapped, "\u{10E8}", Unspecified),
    (0x1CA9, 0x1CA9, Mapped, "\u{10E9}", Unspecified),
    (0x1CAA, 0x1CAA, Mapped, "\u{10EA}", Unspecified),
    (0x1CAB, 0x1CAB, Mapped, "\u{10EB}", Unspecified),
    (0x1CAC, 0x1CAC, Mapped, "\u{10EC}", Unspecified),
    (0x1CAD, 0x1CAD, Mapped, "\u{10ED}", Unspecified),
    (0x1CAE, 0x1CAE, Mapped, "\u{10EE}", Unspecified),
    (0x1CAF, 0x1CAF, Mapped, "\u{10EF}", Unspecified),
    (0x1CB0, 0x1CB0, Mapped, "\u{10F0}", Unspecified),
    (0x1CB1, 0x1CB1, Mapped, "\u{10F1}", Unspecified),
    (0x1CB2, 0x1CB2, Mapped, "\u{10F2}", Unspecified),
    (0x1CB3, 0x1CB3, Mapped, "\u{10F3}", Unspecified),
    (0x1CB4, 0x1CB4, Mapped, "\u{10F4}", Unspecified),
    (0x1CB5, 0x1CB5, Mapped, "\u{10F5}", Unspecified),
    (0x1CB6, 0x1CB6, Mapped, "\u{10F6}", Unspecified),
    (0x1CB7, 0x1CB7, Mapped, "\u{10F7}", Unspecified),
    (0x1CB8, 0x1CB8, Mapped, "\u{10F8}", Unspecified),
    (0x1CB9, 0x1CB9, Mapped, "\u{10F9}", Unspecified),
    (0x1CBA, 0x1CBA, Mapped, "\u{10FA}", Unspecified),
    (0x1CBB, 0x1CBC, Disallowed, "", Unspecified),
    (0x1CBD, 0x1CBD, Mapped, "\u{10FD}", Unspecified),
    (0x1CBE, 0x1CBE, Mapped, "\u{10FE}", Unspecified),
    (0x1CBF, 0x1CBF, Mapped, "\u{10FF}", Unspecified),
    (0x1CC0, 0x1CC7, Valid, "", Nv8),
    (0x1CC8, 0x1CCF, Disallowed, "", Unspecified),
    (0x1CD0, 0x1CD2, Valid, "", Unspecified),
    (0x1CD3, 0x1CD3, Valid, "", Nv8),
    (0x1CD4, 0x1CFA, Valid, "", Unspecified),
    (0x1CFB, 0x1CFF, Disallowed, "", Unspecified),
    (0x1D00, 0x1D2B, Valid, "", Unspecified),
    (0x1D2C, 0x1D2C, Mapped, "a", Unspecified),
    (0x1D2D, 0x1D2D, Mapped, "\u{E6}", Unspecified),
    (0x1D2E, 0x1D2E, Mapped, "b", Unspecified),
    (0x1D2F, 0x1D2F, Valid, "", Unspecified),
    (0x1D30, 0x1D30, Mapped, "d", Unspecified),
    (0x1D31, 0x1D31, Mapped, "e", Unspecified),
    (0x1D32, 0x1D32, Mapped, "\u{1DD}", Unspecified),
    (0x1D33, 0x1D33, Mapped, "g", Unspecified),
    (0x1D34, 0x1D34, Mapped, "h", Unspecified),
    (0x1D35, 0x1D35, Mapped, "i", Unspecified),
    (0x1D36, 0x1D36, Mapped, "j", Unspecified),
    (0x1D37, 0x1D37, Mapped, "k", Unspecified),
    (0x1D38, 0x1D38, Mapped, "l", Unspecified),
    (0x1D39, 0x1D39, Mapped, "m", Unspecified),
    (0x1D3A, 0x1D3A, Mapped, "n", Unspecified),
    (0x1D3B, 0x1D3B, Valid, "", Unspecified),
    (0x1D3C, 0x1D3C, Mapped, "o", Unspecified),
    (0x1D3D, 0x1D3D, Mapped, "\u{223}", Unspecified),
    (0x1D3E, 0x1D3E, Mapped, "p", Unspecified),
    (0x1D3F, 0x1D3F, Mapped, "r", Unspecified),
    (0x1D40, 0x1D40, Mapped, "t", Unspecified),
    (0x1D41, 0x1D41, Mapped, "u", Unspecified),
    (0x1D42, 0x1D42, Mapped, "w", Unspecified),
    (0x1D43, 0x1D43, Mapped, "a", Unspecified),
    (0x1D44, 0x1D44, Mapped, "\u{250}", Unspecified),
    (0x1D45, 0x1D45, Mapped, "\u{251}", Unspecified),
    (0x1D46, 0x1D46, Mapped, "\u{1D02}", Unspecified),
    (0x1D47, 0x1D47, Mapped, "b", Unspecified),
    (0x1D48, 0x1D48, Mapped, "d", Unspecified),
    (0x1D49, 0x1D49, Mapped, "e", Unspecified),
    (0x1D4A, 0x1D4A, Mapped, "\u{259}", Unspecified),
    (0x1D4B, 0x1D4B, Mapped, "\u{25B}", Unspecified),
    (0x1D4C, 0x1D4C, Mapped, "\u{25C}", Unspecified),
    (0x1D4D, 0x1D4D, Mapped, "g", Unspecified),
    (0x1D4E, 0x1D4E, Valid, "", Unspecified),
    (0x1D4F, 0x1D4F, Mapped, "k", Unspecified),
    (0x1D50, 0x1D50, Mapped, "m", Unspecified),
    (0x1D51, 0x1D51, Mapped, "\u{14B}", Unspecified),
    (0x1D52, 0x1D52, Mapped, "o", Unspecified),
    (0x1D53, 0x1D53, Mapped, "\u{254}", Unspecified),
    (0x1D54, 0x1D54, Mapped, "\u{1D16}", Unspecified),
    (0x1D55, 0x1D55, Mapped, "\u{1D17}", Unspecified),
    (0x1D56, 0x1D56, Mapped, "p", Unspecified),
    (0x1D57, 0x1D57, Mapped, "t", Unspecified),
    (0x1D58, 0x1D58, Mapped, "u", Unspecified),
    (0x1D59, 0x1D59, Mapped, "\u{1D1D}", Unspecified),
    (0x1D5A, 0x1D5A, Mapped, "\u{26F}", Unspecified),
    (0x1D5B, 0x1D5B, Mapped, "v", Unspecified),
    (0x1D5C, 0x1D5C, Mapped, "\u{1D25}", Unspecified),
    (0x1D5D, 0x1D5D, Mapped, "\u{3B2}", Unspecified),
    (0x1D5E, 0x1D5E, Mapped, "\u{3B3}", Unspecified),
    (0x1D5F, 0x1D5F, Mapped, "\u{3B4}", Unspecified),
    (0x1D60, 0x1D60, Mapped, "\u{3C6}", Unspecified),
    (0x1D61, 0x1D61, Mapped, "\u{3C7}", Unspecified),
    (0x1D62, 0x1D62, Mapped, "i", Unspecified),
    (0x1D63, 0x1D63, Mapped, "r", Unspecified),
    (0x1D64, 0x1D64, Mapped, "u", Unspecified),
    (0x1D65, 0x1D65, Mapped, "v", Unspecified),
    (0x1D66, 0x1D66, Mapped, "\u{3B2}", Unspecified),
    (0x1D67, 0x1D67, Mapped, "\u{3B3}", Unspecified),
    (0x1D68, 0x1D68, Mapped, "\u{3C1}", Unspecified),
    (0x1D69, 0x1D69, Mapped, "\u{3C6}", Unspecified),
    (0x1D6A, 0x1D6A, Mapped, "\u{3C7}", Unspecified),
    (0x1D6B, 0x1D77, Valid, "", Unspecified),
    (0x1D78, 0x1D78, Mapped, "\u{43D}", Unspecified),
    (0x1D79, 0x1D9A, Valid, "", Unspecified),
    (0x1D9B, 0x1D9B, Mapped, "\u{252}", Unspecified),
    (0x1D9C, 0x1D9C, Mapped, "c", Unspecified),
    (0x1D9D, 0x1D9D, Mapped, "\u{255}", Unspecified),
    (0x1D9E, 0x1D9E, Mapped, "\u{F0}", Unspecified),
    (0x1D9F, 0x1D9F, Mapped, "\u{25C}", Unspecified),
    (0x1DA0, 0x1DA0, Mapped, "f", Unspecified),
    (0x1DA1, 0x1DA1, Mapped, "\u{25F}", Unspecified),
    (0x1DA2, 0x1DA2, Mapped, "\u{261}", Unspecified),
    (0x1DA3, 0x1DA3, Mapped, "\u{265}", Unspecified),
    (0x1DA4, 0x1DA4, Mapped, "\u{268}", Unspecified),
    (0x1DA5, 0x1DA5, Mapped, "\u{269}", Unspecified),
    (0x1DA6, 0x1DA6, Mapped, "\u{26A}", Unspecified),
    (0x1DA7, 0x1DA7, Mapped, "\u{1D7B}", Unspecified),
    (0x1DA8, 0x1DA8, Mapped, "\u{29D}", Unspecified),
    (0x1DA9, 0x1DA9, Mapped, "\u{26D}", Unspecified),
    (0x1DAA, 0x1DAA, Mapped, "\u{1D85}", Unspecified),
    (0x1DAB, 0x1DAB, Mapped, "\u{29F}", Unspecified),
    (0x1DAC, 0x1DAC, Mapped, "\u{271}", Unspecified),
    (0x1DAD, 0x1DAD, Mapped, "\u{270}", Unspecified),
    (0x1DAE, 0x1DAE, Mapped, "\u{272}", Unspecified),
    (0x1DAF, 0x1DAF, Mapped, "\u{273}", Unspecified),
    (0x1DB0, 0x1DB0, Mapped, "\u{274}", Unspecified),
    (0x1DB1, 0x1DB1, Mapped, "\u{275}", Unspecified),
    (0x1DB2, 0x1DB2, Mapped, "\u{278}", Unspecified),
    (0x1DB3, 0x1DB3, Mapped, "\u{282}", Unspecified),
    (0x1DB4, 0x1DB4, Mapped, "\u{283}", Unspecified),
    (0x1DB5, 0x1DB5, Mapped, "\u{1AB}", Unspecified),
    (0x1DB6, 0x1DB6, Mapped, "\u{289}", Unspecified),
    (0x1DB7, 0x1DB7, Mapped, "\u{28A}", Unspecified),
    (0x1DB8, 0x1DB8, Mapped, "\u{1D1C}", Unspecified),
    (0x1DB9, 0x1DB9, Mapped, "\u{28B}", Unspecified),
    (0x1DBA, 0x1DBA, Mapped, "\u{28C}", Unspecified),
    (0x1DBB, 0x1DBB, Mapped, "z", Unspecified),
    (0x1DBC, 0x1DBC, Mapped, "\u{290}", Unspecified),
    (0x1DBD, 0x1DBD, Mapped, "\u{291}", Unspecified),
    (0x1DBE, 0x1DBE, Mapped, "\u{292}", Unspecified),
    (0x1DBF, 0x1DBF, Mapped, "\u{3B8}", Unspecified),
    (0x1DC0, 0x1DF9, Valid, "", Unspecified),
    (0x1DFA, 0x1DFA, Disallowed, "", Unspecified),
    (0x1DFB, 0x1DFF, Valid, "", Unspecified),
    (0x1E00, 0x1E00, Mapped, "\u{1E01}", Unspecified),
    (0x1E01, 0x1E01, Valid, "", Unspecified),
    (0x1E02, 0x1E02, Mapped, "\u{1E03}", Unspecified),
    (0x1E03, 0x1E03, Valid, "", Unspecified),
    (0x1E04, 0x1E04, Mapped, "\u{1E05}", Unspecified),
    (0x1E05, 0x1E05, Valid, "", Unspecified),
    (0x1E06, 0x1E06, Mapped, "\u{1E07}", Unspecified),
    (0x1E07, 0x1E07, Valid, "", Unspecified),
    (0x1E08, 0x1E08, Mapped, "\u{1E09}", Unspecified),
    (0x1E09, 0x1E09, Valid, "", Unspecified),
    (0x1E0A, 0x1E0A, Mapped, "\u{1E0B}", Unspecified),
    (0x1E0B, 0x1E0B, Valid, "", Unspecified),
    (0x1E0C, 0x1E0C, Mapped, "\u{1E0D}", Unspecified),
    (0x1E0D, 0x1E0D, Valid, "", Unspecified),
    (0x1E0E, 0x1E0E, Mapped, "\u{1E0F}", Unspecified),
    (0x1E0F, 0x1E0F, Valid, "", Unspecified),
    (0x1E10, 0x1E10, Mapped, "\u{1E11}", Unspecified),
    (0x1E11, 0x1E11, Valid, "", Unspecified),
    (0x1E12, 0x1E12, Mapped, "\u{1E13}", Unspecified),
    (0x1E13, 0x1E13, Valid, "", Unspecified),
    (0x1E14, 0x1E14, Mapped, "\u{1E15}", Unspecified),
    (0x1E15, 0x1E15, Valid, "", Unspecified),
    (0x1E16, 0x1E16, Mapped, "\u{1E17}", Unspecified),
    (0x1E17, 0x1E17, Valid, "", Unspecified),
    (0x1E18, 0x1E18, Mapped, "\u{1E19}", Unspecified),
    (0x1E19, 0x1E19, Valid, "", Unspecified),
    (0x1E1A, 0x1E1A, Mapped, "\u{1E1B}", Unspecified),
    (0x1E1B, 0x1E1B, Valid, "", Unspecified),
    (0x1E1C, 0x1E1C, Mapped, "\u{1E1D}", Unspecified),
    (0x1E1D, 0x1E1D, Valid, "", Unspecified),
    (0x1E1E, 0x1E1E, Mapped, "\u{1E1F}", Unspecified),
    (0x1E1F, 0x1E1F, Valid, "", Unspecified),
    (0x1E20, 0x1E20, Mapped, "\u{1E21}", Unspecified),
    (0x1E21, 0x1E21, Valid, "", Unspecified),
    (0x1E22, 0x1E22, Mapped, "\u{1E23}", Unspecified),
    (0x1E23, 0x1E23, Valid, "", Unspecified),
    (0x1E24, 0x1E24, Mapped, "\u{1E25}", Unspecified),
    (0x1E25, 0x1E25, Valid, "", Unspecified),
    (0x1E26, 0x1E26, Mapped, "\u{1E27}", Unspecified),
    (0x1E27, 0x1E27, Valid, "", Unspecified),
    (0x1E28, 0x1E28, Mapped, "\u{1E29}", Unspecified),
    (0x1E29, 0x1E29, Valid, "", Unspecified),
    (0x1E2A, 0x1E2A, Mapped, "\u{1E2B}", Unspecified),
    (0x1E2B, 0x1E2B, Valid, "", Unspecified),
    (0x1E2C, 0x1E2C, Mapped, "\u{1E2D}", Unspecified),
    (0x1E2D, 0x1E2D, Valid, "", Unspecified),
    (0x1E2E, 0x1E2E, Mapped, "\u{1E2F}", Unspecified),
    (0x1E2F, 0x1E2F, Valid, "", Unspecified),
    (0x1E30, 0x1E30, Mapped, "\u{1E31}", Unspecified),
    (0x1E31, 0x1E31, Valid, "", Unspecified),
    (0x1E32, 0x1E32, Mapped, "\u{1E33}", Unspecified),
    (0x1E33, 0x1E33, Valid, "", Unspecified),
    (0x1E34, 0x1E34, Mapped, "\u{1E35}", Unspecified),
    (0x1E35, 0x1E35, Valid, "", Unspecified),
    (0x1E36, 0x1E36, Mapped, "\u{1E37}", Unspecified),
    (0x1E37, 0x1E37, Valid, "", Unspecified),
    (0x1E38, 0x1E38, Mapped, "\u{1E39}", Unspecified),
    (0x1E39, 0x1E39, Valid, "", Unspecified),
    (0x1E3A, 0x1E3A, Mapped, "\u{1E3B}", Unspecified),
    (0x1E3B, 0x1E3B, Valid, "", Unspecified),
    (0x1E3C, 0x1E3C, Mapped, "\u{1E3D}", Unspecified),
    (0x1E3D, 0x1E3D, Valid, "", Unspecified),
    (0x1E3E, 0x1E3E, Mapped, "\u{1E3F}", Unspecified),
    (0x1E3F, 0x1E3F, Valid, "", Unspecified),
    (0x1E40, 0x1E40, Mapped, "\u{1E41}", Unspecified),
    (0x1E41, 0x1E41, Valid, "", Unspecified),
    (0x1E42, 0x1E42, Mapped, "\u{1E43}", Unspecified),
    (0x1E43, 0x1E43, Valid, "", Unspecified),
    (0x1E44, 0x1E44, Mapped, "\u{1E45}", Unspecified),
    (0x1E45, 0x1E45, Valid, "", Unspecified),
    (0x1E46, 0x1E46, Mapped, "\u{1E47}", Unspecified),
    (0x1E47, 0x1E47, Valid, "", Unspecified),
    (0x1E48, 0x1E48, Mapped, "\u{1E49}", Unspecified),
    (0x1E49, 0x1E49, Valid, "", Unspecified),
    (0x1E4A, 0x1E4A, Mapped, "\u{1E4B}", Unspecified),
    (0x1E4B, 0x1E4B, Valid, "", Unspecified),
    (0x1E4C, 0x1E4C, Mapped, "\u{1E4D}", Unspecified),
    (0x1E4D, 0x1E4D, Valid, "", Unspecified),
    (0x1E4E, 0x1E4E, Mapped, "\u{1E4F}", Unspecified),
    (0x1E4F, 0x1E4F, Valid, "", Unspecified),
    (0x1E50, 0x1E50, Mapped, "\u{1E51}", Unspecified),
    (0x1E51, 0x1E51, Valid, "", Unspecified),
    (0x1E52, 0x1E52, Mapped, "\u{1E53}", Unspecified),
    (0x1E53, 0x1E53, Valid, "", Unspecified),
    (0x1E54, 0x1E54, Mapped, "\u{1E55}", Unspecified),
    (0x1E55, 0x1E55, Valid, "", Unspecified),
    (0x1E56, 0x1E56, Mapped, "\u{1E57}", Unspecified),
    (0x1E57, 0x1E57, Valid, "", Unspecified),
    (0x1E58, 0x1E58, Mapped, "\u{1E59}", Unspecified),
    (0x1E59, 0x1E59, Valid, "", Unspecified),
    (0x1E5A, 0x1E5A, Mapped, "\u{1E5B}", Unspecified),
    (0x1E5B, 0x1E5B, Valid, "", Unspecified),
    (0x1E5C, 0x1E5C, Mapped, "\u{1E5D}", Unspecified),
    (0x1E5D, 0x1E5D, Valid, "", Unspecified),
    (0x1E5E, 0x1E5E, Mapped, "\u{1E5F}", Unspecified),
    (0x1E5F, 0x1E5F, Valid, "", Unspecified),
    (0x1E60, 0x1E60, Mapped, "\u{1E61}", Unspecified),
    (0x1E61, 0x1E61, Valid, "", Unspecified),
    (0x1E62, 0x1E62, Mapped, "\u{1E63}", Unspecified),
    (0x1E63, 0x1E63, Valid, "", Unspecified),
    (0x1E64, 0x1E64, Mapped, "\u{1E65}", Unspecified),
    (0x1E65, 0x1E65, Valid, "", Unspecified),
    (0x1E66, 0x1E66, Mapped, "\u{1E67}", Unspecified),
    (0x1E67, 0x1E67, Valid, "", Unspecified),
    (0x1E68, 0x1E68, Mapped, "\u{1E69}", Unspecified),
    (0x1E69, 0x1E69, Valid, "", Unspecified),
    (0x1E6A, 0x1E6A, Mapped, "\u{1E6B}", Unspecified),
    (0x1E6B, 0x1E6B, Valid, "", Unspecified),
    (0x1E6C, 0x1E6C, Mapped, "\u{1E6D}", Unspecified),
    (0x1E6D, 0x1E6D, Valid, "", Unspecified),
    (0x1E6E, 0x1E6E, Mapped, "\u{1E6F}", Unspecified),
    (0x1E6F, 0x1E6F, Valid, "", Unspecified),
    (0x1E70, 0x1E70, Mapped, "\u{1E71}", Unspecified),
    (0x1E71, 0x1E71, Valid, "", Unspecified),
    (0x1E72, 0x1E72, Mapped, "\u{1E73}", Unspecified),
    (0x1E73, 0x1E73, Valid, "", Unspecified),
    (0x1E74, 0x1E74, Mapped, "\u{1E75}", Unspecified),
    (0x1E75, 0x1E75, Valid, "", Unspecified),
    (0x1E76, 0x1E76, Mapped, "\u{1E77}", Unspecified),
    (0x1E77, 0x1E77, Valid, "", Unspecified),
    (0x1E78, 0x1E78, Mapped, "\u{1E79}", Unspecified),
    (0x1E79, 0x1E79, Valid, "", Unspecified),
    (0x1E7A, 0x1E7A, Mapped, "\u{1E7B}", Unspecified),
    (0x1E7B, 0x1E7B, Valid, "", Unspecified),
    (0x1E7C, 0x1E7C, Mapped, "\u{1E7D}", Unspecified),
    (0x1E7D, 0x1E7D, Valid, "", Unspecified),
    (0x1E7E, 0x1E7E, Mapped, "\u{1E7F}", Unspecified),
    (0x1E7F, 0x1E7F, Valid, "", Unspecified),
    (0x1E80, 0x1E80, Mapped, "\u{1E81}", Unspecified),
    (0x1E81, 0x1E81, Valid, "", Unspecified),
    (0x1E82, 0x1E82, Mapped, "\u{1E83}", Unspecified),
    (0x1E83, 0x1E83, Valid, "", Unspecified),
    (0x1E84, 0x1E84, Mapped, "\u{1E85}", Unspecified),
    (0x1E85, 0x1E85, Valid, "", Unspecified),
    (0x1E86, 0x1E86, Mapped, "\u{1E87}", Unspecified),
    (0x1E87, 0x1E87, Valid, "", Unspecified),
    (0x1E88, 0x1E88, Mapped, "\u{1E89}", Unspecified),
    (0x1E89, 0x1E89, Valid, "", Unspecified),
    (0x1E8A, 0x1E8A, Mapped, "\u{1E8B}", Unspecified),
    (0x1E8B, 0x1E8B, Valid, "", Unspecified),
    (0x1E8C, 0x1E8C, Mapped, "\u{1E8D}", Unspecified),
    (0x1E8D, 0x1E8D, Valid, "", Unspecified),
    (0x1E8E, 0x1E8E, Mapped, "\u{1E8F}", Unspecified),
    (0x1E8F, 0x1E8F, Valid, "", Unspecified),
    (0x1E90, 0x1E90, Mapped, "\u{1E91}", Unspecified),
    (0x1E91, 0x1E91, Valid, "", Unspecified),
    (0x1E92, 0x1E92, Mapped, "\u{1E93}", Unspecified),
    (0x1E93, 0x1E93, Valid, "", Unspecified),
    (0x1E94, 0x1E94, Mapped, "\u{1E95}", Unspecified),
    (0x1E95, 0x1E99, Valid, "", Unspecified),
    (0x1E9A, 0x1E9A, Mapped, "a\u{2BE}", Unspecified),
    (0x1E9B, 0x1E9B, Mapped, "\u{1E61}", Unspecified),
    (0x1E9C, 0x1E9D, Valid, "", Unspecified),
    (0x1E9E, 0x1E9E, Mapped, "ss", Unspecified),
    (0x1E9F, 0x1E9F, Valid, "", Unspecified),
    (0x1EA0, 0x1EA0, Mapped, "\u{1EA1}", Unspecified),
    (0x1EA1, 0x1EA1, Valid, "", Unspecified),
    (0x1EA2, 0x1EA2, Mapped, "\u{1EA3}", Unspecified),
    (0x1EA3, 0x1EA3, Valid, "", Unspecified),
    (0x1EA4, 0x1EA4, Mapped, "\u{1EA5}", Unspecified),
    (0x1EA5, 0x1EA5, Valid, "", Unspecified),
    (0x1EA6, 0x1EA6, Mapped, "\u{1EA7}", Unspecified),
    (0x1EA7, 0x1EA7, Valid, "", Unspecified),
    (0x1EA8, 0x1EA8, Mapped, "\u{1EA9}", Unspecified),
    (0x1EA9, 0x1EA9, Valid, "", Unspecified),
    (0x1EAA, 0x1EAA, Mapped, "\u{1EAB}", Unspecified),
    (0x1EAB, 0x1EAB, Valid, "", Unspecified),
    (0x1EAC, 0x1EAC, Mapped, "\u{1EAD}", Unspecified),
    (0x1EAD, 0x1EAD, Valid, "", Unspecified),
    (0x1EAE, 0x1EAE, Mapped, "\u{1EAF}", Unspecified),
    (0x1EAF, 0x1EAF, Valid, "", Unspecified),
    (0x1EB0, 0x1EB0, Mapped, "\u{1EB1}", Unspecified),
    (0x1EB1, 0x1EB1, Valid, "", Unspecified),
    (0x1EB2, 0x1EB2, Mapped, "\u{1EB3}", Unspecified),
    (0x1EB3, 0x1EB3, Valid, "", Unspecified),
    (0x1EB4, 0x1EB4, Mapped, "\u{1EB5}", Unspecified),
    (0x1EB5, 0x1EB5, Valid, "", Unspecified),
    (0x1EB6, 0x1EB6, Mapped, "\u{1EB7}", Unspecified),
    (0x1EB7, 0x1EB7, Valid, "", Unspecified),
    (0x1EB8, 0x1EB8, Mapped, "\u{1EB9}", Unspecified),
    (0x1EB9, 0x1EB9, Valid, "", Unspecified),
    (0x1EBA, 0x1EBA, Mapped, "\u{1EBB}", Unspecified),
    (0x1EBB, 0x1EBB, Valid, "", Unspecified),
    (0x1EBC, 0x1EBC, Mapped, "\u{1EBD}", Unspecified),
    (0x1EBD, 0x1EBD, Valid, "", Unspecified),
    (0x1EBE, 0x1EBE, Mapped, "\u{1EBF}", Unspecified),
    (0x1EBF, 0x1EBF, Valid, "", Unspecified),
    (0x1EC0, 0x1EC0, Mapped, "\u{1EC1}", Unspecified),
    (0x1EC1, 0x1EC1, Valid, "", Unspecified),
    (0x1EC2, 0x1EC2, Mapped, "\u{1EC3}", Unspecified),
    (0x1EC3, 0x1EC3, Valid, "", Unspecified),
    (0x1EC4, 0x1EC4, Mapped, "\u{1EC5}", Unspecified),
    (0x1EC5, 0x1EC5, Valid, "", Unspecified),
    (0x1EC6, 0x1EC6, Mapped, "\u{1EC7}", Unspecified),
    (0x1EC7, 0x1EC7, Valid, "", Unspecified),
    (0x1EC8, 0x1EC8, Mapped, "\u{1EC9}", Unspecified),
    (0x1EC9, 0x1EC9, Valid, "", Unspecified),
    (0x1ECA, 0x1ECA, Mapped, "\u{1ECB}", Unspecified),
    (0x1ECB, 0x1ECB, Valid, "", Unspecified),
    (0x1ECC, 0x1ECC, Mapped, "\u{1ECD}", Unspecified),
    (0x1ECD, 0x1ECD, Valid, "", Unspecified),
    (0x1ECE, 0x1ECE, Mapped, "\u{1ECF}", Unspecified),
    (0x1ECF, 0x1ECF, Valid, "", Unspecified),
    (0x1ED0, 0x1ED0, Mapped, "\u{1ED1}", Unspecified),
    (0x1ED1, 0x1ED1, Valid, "", Unspecified),
    (0x1ED2, 0x1ED2, Mapped, "\u{1ED3}", Unspecified),
    (0x1ED3, 0x1ED3, Valid, "", Unspecified),
    (0x1ED4, 0x1ED4, Mapped, "\u{1ED5}", Unspecified),
    (0x1ED5, 0x1ED5, Valid, "", Unspecified),
    (0x1ED6, 0x1ED6, Mapped, "\u{1ED7}", Unspecified),
    (0x1ED7, 0x1ED7, Valid, "", Unspecified),
    (0x1ED8, 0x1ED8, Mapped, "\u{1ED9}", Unspecified),
    (0x1ED9, 0x1ED9, Valid, "", Unspecified),
    (0x1EDA, 0x1EDA, Mapped, "\u{1EDB}", Unspecified),
    (0x1EDB, 0x1EDB, Valid, "", Unspecified),
    (0x1EDC, 0x1EDC, Mapped, "\u{1EDD}", Unspecified),
    (0x1EDD, 0x1EDD, Valid, "", Unspecified),
    (0x1EDE, 0x1EDE, Mapped, "\u{1EDF}", Unspecified),
    (0x1EDF, 0x1EDF, Valid, "", Unspecified),
    (0x1EE0, 0x1EE0, Mapped, "\u{1EE1}", Unspecified),
    (0x1EE1, 0x1EE1, Valid, "", Unspecified),
    (0x1EE2, 0x1EE2, Mapped, "\u{1EE3}", Unspecified),
    (0x1EE3, 0x1EE3, Valid, "", Unspecified),
    (0x1EE4, 0x1EE4, Mapped, "\u{1EE5}", Unspecified),
    (0x1EE5, 0x1EE5, Valid, "", Unspecified),
    (0x1EE6, 0x1EE6, Mapped, "\u{1EE7}", Unspecified),
    (0x1EE7, 0x1EE7, Valid, "", Unspecified),
    (0x1EE8, 0x1EE8, Mapped, "\u{1EE9}", Unspecified),
    (0x1EE9, 0x1EE9, Valid, "", Unspecified),
    (0x1EEA, 0x1EEA, Mapped, "\u{1EEB}", Unspecified),
    (0x1EEB, 0x1EEB, Valid, "", Unspecified),
    (0x1EEC, 0x1EEC, Mapped, "\u{1EED}", Unspecified),
    (0x1EED, 0x1EED, Valid, "", Unspecified),
    (0x1EEE, 0x1EEE, Mapped, "\u{1EEF}", Unspecified),
    (0x1EEF, 0x1EEF, Valid, "", Unspecified),
    (0x1EF0, 0x1EF0, Mapped, "\u{1EF1}", Unspecified),
    (0x1EF1, 0x1EF1, Valid, "", Unspecified),
    (0x1EF2, 0x1EF2, Mapped, "\u{1EF3}", Unspecified),
    (0x1EF3, 0x1EF3, Valid, "", Unspecified),
    (0x1EF4, 0x1EF4, Mapped, "\u{1EF5}", Unspecified),
    (0x1EF5, 0x1EF5, Valid, "", Unspecified),
    (0x1EF6, 0x1EF6, Mapped, "\u{1EF7}", Unspecified),
    (0x1EF7, 0x1EF7, Valid, "", Unspecified),
    (0x1EF8, 0x1EF8, Mapped, "\u{1EF9}", Unspecified),
    (0x1EF9, 0x1EF9, Valid, "", Unspecified),
    (0x1EFA, 0x1EFA, Mapped, "\u{1EFB}", Unspecified),
    (0x1EFB, 0x1EFB, Valid, "", Unspecified),
    (0x1EFC, 0x1EFC, Mapped, "\u{1EFD}", Unspecified),
    (0x1EFD, 0x1EFD, Valid, "", Unspecified),
    (0x1EFE, 0x1EFE, Mapped, "\u{1EFF}", Unspecified),
    (0x1EFF, 0x1F07, Valid, "", Unspecified),
    (0x1F08, 0x1F08, Mapped, "\u{1F00}", Unspecified),
    (0x1F09, 0x1F09, Mapped, "\u{1F01}", Unspecified),
    (0x1F0A, 0x1F0A, Mapped, "\u{1F02}", Unspecified),
    (0x1F0B, 0x1F0B, Mapped, "\u{1F03}", Unspecified),
    (0x1F0C, 0x1F0C, Mapped, "\u{1F04}", Unspecified),
    (0x1F0D, 0x1F0D, Mapped, "\u{1F05}", Unspecified),
    (0x1F0E, 0x1F0E, Mapped, "\u{1F06}", Unspecified),
    (0x1F0F, 0x1F0F, Mapped, "\u{1F07}", Unspecified),
    (0x1F10, 0x1F15, Valid, "", Unspecified),
    (0x1F16, 0x1F17, Disallowed, "", Unspecified),
    (0x1F18, 0x1F18, Mapped, "\u{1F10}", Unspecified),
    (0x1F19, 0x1F19, Mapped, "\u{1F11}", Unspecified),
    (0x1F1A, 0x1F1A, Mapped, "\u{1F12}", Unspecified),
    (0x1F1B, 0x1F1B, Mapped, "\u{1F13}", Unspecified),
    (0x1F1C, 0x1F1C, Mapped, "\u{1F14}", Unspecified),
    (0x1F1D, 0x1F1D, Mapped, "\u{1F15}", Unspecified),
    (0x1F1E, 0x1F1F, Disallowed, "", Unspecified),
    (0x1F20, 0x1F27, Valid, "", Unspecified),
    (0x1F28, 0x1F28, Mapped, "\u{1F20}", Unspecified),
    (0x1F29, 0x1F29, Mapped, "\u{1F21}", Unspecified),
    (0x1F2A, 0x1F2A, Mapped, "\u{1F22}", Unspecified),
    (0x1F2B, 0x1F2B, Mapped, "\u{1F23}", Unspecified),
    (0x1F2C, 0x1F2C, Mapped, "\u{1F24}", Unspecified),
    (0x1F2D, 0x1F2D, Mapped, "\u{1F25}", Unspecified),
    (0x1F2E, 0x1F2E, Mapped, "\u{1F26}", Unspecified),
    (0x1F2F, 0x1F2F, Mapped, "\u{1F27}", Unspecified),
    (0x1F30, 0x1F37, Valid, "", Unspecified),
    (0x1F38, 0x1F38, Mapped, "\u{1F30}", Unspecified),
    (0x1F39, 0x1F39, Mapped, "\u{1F31}", Unspecified),
    (0x1F3A, 0x1F3A, Mapped, "\u{1F32}", Unspecified),
    (0x1F3B, 0x1F3B, Mapped, "\u{1F33}", Unspecified),
    (0x1F3C, 0x1F3C, Mapped, "\u{1F34}", Unspecified),
    (0x1F3D, 0x1F3D, Mapped, "\u{1F35}", Unspecified),
    (0x1F3E, 0x1F3E, Mapped, "\u{1F36}", Unspecified),
    (0x1F3F, 0x1F3F, Mapped, "\u{1F37}", Unspecified),
    (0x1F40, 0x1F45, Valid, "", Unspecified),
    (0x1F46, 0x1F47, Disallowed, "", Unspecified),
    (0x1F48, 0x1F48, Mapped, "\u{1F40}", Unspecified),
    (0x1F49, 0x1F49, Mapped, "\u{1F41}", Unspecified),
    (0x1F4A, 0x1F4A, Mapped, "\u{1F42}", Unspecified),
    (0x1F4B, 0x1F4B, Mapped, "\u{1F43}", Unspecified),
    (0x1F4C, 0x1F4C, Mapped, "\u{1F44}", Unspecified),
    (0x1F4D, 0x1F4D, Mapped, "\u{1F45}", Unspecified),
    (0x1F4E, 0x1F4F, Disallowed, "", Unspecified),
    (0x1F50, 0x1F57, Valid, "", Unspecified),
    (0x1F58, 0x1F58, Disallowed, "", Unspecified),
    (0x1F59, 0x1F59, Mapped, "\u{1F51}", Unspecified),
    (0x1F5A, 0x1F5A, Disallowed, "", Unspecified),
    (0x1F5B, 0x1F5B, Mapped, "\u{1F53}", Unspecified),
    (0x1F5C, 0x1F5C, Disallowed, "", Unspecified),
    (0x1F5D, 0x1F5D, Mapped, "\u{1F55}", Unspecified),
    (0x1F5E, 0x1F5E, Disallowed, "", Unspecified),
    (0x1F5F, 0x1F5F, Mapped, "\u{1F57}", Unspecified),
    (0x1F60, 0x1F67, Valid, "", Unspecified),
    (0x1F68, 0x1F68, Mapped, "\u{1F60}", Unspecified),
    (0x1F69, 0x1F69, Mapped, "\u{1F61}", Unspecified),
    (0x1F6A, 0x1F6A, Mapped, "\u{1F62}", Unspecified),
    (0x1F6B, 0x1F6B, Mapped, "\u{1F63}", Unspecified),
    (0x1F6C, 0x1F6C, Mapped, "\u{1F64}", Unspecified),
    (0x1F6D, 0x1F6D, Mapped, "\u{1F65}", Unspecified),
    (0x1F6E, 0x1F6E, Mapped, "\u{1F66}", Unspecified),
    (0x1F6F, 0x1F6F, Mapped, "\u{1F67}", Unspecified),
    (0x1F70, 0x1F70, Valid, "", Unspecified),
    (0x1F71, 0x1F71, Mapped, "\u{3AC}", Unspecified),
    (0x1F72, 0x1F72, Valid, "", Unspecified),
    (0x1F73, 0x1F73, Mapped, "\u{3AD}", Unspecified),
    (0x1F74, 0x1F74, Valid, "", Unspecified),
    (0x1F75, 0x1F75, Mapped, "\u{3AE}", Unspecified),
    (0x1F76, 0x1F76, Valid, "", Unspecified),
    (0x1F77, 0x1F77, Mapped, "\u{3AF}", Unspecified),
    (0x1F78, 0x1F78, Valid, "", Unspecified),
    (0x1F79, 0x1F79, Mapped, "\u{3CC}", Unspecified),
    (0x1F7A, 0x1F7A, Valid, "", Unspecified),
    (0x1F7B, 0x1F7B, Mapped, "\u{3CD}", Unspecified),
    (0x1F7C, 0x1F7C, Valid, "", Unspecified),
    (0x1F7D, 0x1F7D, Mapped, "\u{3CE}", Unspecified),
    (0x1F7E, 0x1F7F, Disallowed, "", Unspecified),
    (0x1F80, 0x1F80, Mapped, "\u{1F00}\u{3B9}", Unspecified),
    (0x1F81, 0x1F81, Mapped, "\u{1F01}\u{3B9}", Unspecified),
    (0x1F82, 0x1F82, Mapped, "\u{1F02}\u{3B9}", Unspecified),
    (0x1F83, 0x1F83, Mapped, "\u{1F03}\u{3B9}", Unspecified),
    (0x1F84, 0x1F84, Mapped, "\u{1F04}\u{3B9}", Unspecified),
    (0x1F85, 0x1F85, Mapped, "\u{1F05}\u{3B9}", Unspecified),
    (0x1F86, 0x1F86, Mapped, "\u{1F06}\u{3B9}", Unspecified),
    (0x1F87, 0x1F87, Mapped, "\u{1F07}\u{3B9}", Unspecified),
    (0x1F88, 0x1F88, Mapped, "\u{1F00}\u{3B9}", Unspecified),
    (0x1F89, 0x1F89, Mapped, "\u{1F01}\u{3B9}", Unspecified),
    (0x1F8A, 0x1F8A, Mapped, "\u{1F02}\u{3B9}", Unspecified),
    (0x1F8B, 0x1F8B, Mapped, "\u{1F03}\u{3B9}", Unspecified),
    (0x1F8C, 0x1F8C, Mapped, "\u{1F04}\u{3B9}", Unspecified),
    (0x1F8D, 0x1F8D, Mapped, "\u{1F05}\u{3B9}", Unspecified),
    (0x1F8E, 0x1F8E, Mapped, "\u{1F06}\u{3B9}", Unspecified),
    (0x1F8F, 0x1F8F, Mapped, "\u{1F07}\u{3B9}", Unspecified),
    (0x1F90, 0x1F90, Mapped, "\u{1F20}\u{3B9}", Unspecified),
    (0x1F91, 0x1F91, Mapped, "\u{1F21}\u{3B9}", Unspecified),
    (0x1F92, 0x1F92, Mapped, "\u{1F22}\u{3B9}", Unspecified),
    (0x1F93, 0x1F93, Mapped, "\u{1F23}\u{3B9}", Unspecified),
    (0x1F94, 0x1F94, Mapped, "\u{1F24}\u{3B9}", Unspecified),
    (0x1F95, 0x1F95, Mapped, "\u{1F25}\u{3B9}", Unspecified),
    (0x1F96, 0x1F96, Mapped, "\u{1F26}\u{3B9}", Unspecified),
    (0x1F97, 0x1F97, Mapped, "\u{1F27}\u{3B9}", Unspecified),
    (0x1F98, 0x1F98, Mapped, "\u{1F20}\u{3B9}", Unspecified),
    (0x1F99, 0x1F99, Mapped, "\u{1F21}\u{3B9}", Unspecified),
    (0x1F9A, 0x1F9A, Mapped, "\u{1F22}\u{3B9}", Unspecified),
    (0x1F9B, 0x1F9B, Mapped, "\u{1F23}\u{3B9}", Unspecified),
    (0x1F9C, 0x1F9C, Mapped, "\u{1F24}\u{3B9}", Unspecified),
    (0x1F9D, 0x1F9D, Mapped, "\u{1F25}\u{3B9}", Unspecified),
    (0x1F9E, 0x1F9E, Mapped, "\u{1F26}\u{3B9}", Unspecified),
    (0x1F9F, 0x1F9F, Mapped, "\u{1F27}\u{3B9}", Unspecified),
    (0x1FA0, 0x1FA0, Mapped, "\u{1F60}\u{3B9}", Unspecified),
    (0x1FA1, 0x1FA1, Mapped, "\u{1F61}\u{3B9}", Unspecified),
    (0x1FA2, 0x1FA2, Mapped, "\u{1F62}\u{3B9}", Unspecified),
    (0x1FA3, 0x1FA3, Mapped, "\u{1F63}\u{3B9}", Unspecified),
    (0x1FA4, 0x1FA4, Mapped, "\u{1F64}\u{3B9}", Unspecified),
    (0x1FA5, 0x1FA5, Mapped, "\u{1F65}\u{3B9}", Unspecified),
    (0x1FA6, 0x1FA6, Mapped, "\u{1F66}\u{3B9}", Unspecified),
    (0x1FA7, 0x1FA7, Mapped, "\u{1F67}\u{3B9}", Unspecified),
    (0x1FA8, 0x1FA8, Mapped, "\u{1F60}\u{3B9}", Unspecified),
    (0x1FA9, 0x1FA9, Mapped, "\u{1F61}\u{3B9}", Unspecified),
    (0x1FAA, 0x1FAA, Mapped, "\u{1F62}\u{3B9}", Unspecified),
    (0x1FAB, 0x1FAB, Mapped, "\u{1F63}\u{3B9}", Unspecified),
    (0x1FAC, 0x1FAC, Mapped, "\u{1F64}\u{3B9}", Unspecified),
    (0x1FAD, 0x1FAD, Mapped, "\u{1F65}\u{3B9}", Unspecified),
    (0x1FAE, 0x1FAE, Mapped, "\u{1F66}\u{3B9}", Unspecified),
    (0x1FAF, 0x1FAF, Mapped, "\u{1F67}\u{3B9}", Unspecified),
    (0x1FB0, 0x1FB1, Valid, "", Unspecified),
    (0x1FB2, 0x1FB2, Mapped, "\u{1F70}\u{3B9}", Unspecified),
    (0x1FB3, 0x1FB3, Mapped, "\u{3B1}\u{3B9}", Unspecified),
    (0x1FB4, 0x1FB4, Mapped, "\u{3AC}\u{3B9}", Unspecified),
    (0x1FB5, 0x1FB5, Disallowed, "", Unspecified),
    (0x1FB6, 0x1FB6, Valid, "", Unspecified),
    (0x1FB7, 0x1FB7, Mapped, "\u{1FB6}\u{3B9}", Unspecified),
    (0x1FB8, 0x1FB8, Mapped, "\u{1FB0}", Unspecified),
    (0x1FB9, 0x1FB9, Mapped, "\u{1FB1}", Unspecified),
    (0x1FBA, 0x1FBA, Mapped, "\u{1F70}", Unspecified),
    (0x1FBB, 0x1FBB, Mapped, "\u{3AC}", Unspecified),
    (0x1FBC, 0x1FBC, Mapped, "\u{3B1}\u{3B9}", Unspecified),
    (0x1FBD, 0x1FBD, DisallowedStd3Mapped, " \u{313}", Unspecified),
    (0x1FBE, 0x1FBE, Mapped, "\u{3B9}", Unspecified),
    (0x1FBF, 0x1FBF, DisallowedStd3Mapped, " \u{313}", Unspecified),
    (0x1FC0, 0x1FC0, DisallowedStd3Mapped, " \u{342}", Unspecified),
    (0x1FC1, 0x1FC1, DisallowedStd3Mapped, " \u{308}\u{342}", Unspecified),
    (0x1FC2, 0x1FC2, Mapped, "\u{1F74}\u{3B9}", Unspecified),
    (0x1FC3, 0x1FC3, Mapped, "\u{3B7}\u{3B9}", Unspecified),
    (0x1FC4, 0x1FC4, Mapped, "\u{3AE}\u{3B9}", Unspecified),
    (0x1FC5, 0x1FC5, Disallowed, "", Unspecified),
    (0x1FC6, 0x1FC6, Valid, "", Unspecified),
    (0x1FC7, 0x1FC7, Mapped, "\u{1FC6}\u{3B9}", Unspecified),
    (0x1FC8, 0x1FC8, Mapped, "\u{1F72}", Unspecified),
    (0x1FC9, 0x1FC9, Mapped, "\u{3AD}", Unspecified),
    (0x1FCA, 0x1FCA, Mapped, "\u{1F74}", Unspecified),
    (0x1FCB, 0x1FCB, Mapped, "\u{3AE}", Unspecified),
    (0x1FCC, 0x1FCC, Mapped, "\u{3B7}\u{3B9}", Unspecified),
    (0x1FCD, 0x1FCD, DisallowedStd3Mapped, " \u{313}\u{300}", Unspecified),
    (0x1FCE, 0x1FCE, DisallowedStd3Mapped, " \u{313}\u{301}", Unspecified),
    (0x1FCF, 0x1FCF, DisallowedStd3Mapped, " \u{313}\u{342}", Unspecified),
    (0x1FD0, 0x1FD2, Valid, "", Unspecified),
    (0x1FD3, 0x1FD3, Mapped, "\u{390}", Unspecified),
    (0x1FD4, 0x1FD5, Disallowed, "", Unspecified),
    (0x1FD6, 0x1FD7, Valid, "", Unspecified),
    (0x1FD8, 0x1FD8, Mapped, "\u{1FD0}", Unspecified),
    (0x1FD9, 0x1FD9, Mapped, "\u{1FD1}", Unspecified),
    (0x1FDA, 0x1FDA, Mapped, "\u{1F76}", Unspecified),
    (0x1FDB, 0x1FDB, Mapped, "\u{3AF}", Unspecified),
    (0x1FDC, 0x1FDC, Disallowed, "", Unspecified),
    (0x1FDD, 0x1FDD, DisallowedStd3Mapped, " \u{314}\u{300}", Unspecified),
    (0x1FDE, 0x1FDE, DisallowedStd3Mapped, " \u{314}\u{301}", Unspecified),
    (0x1FDF, 0x1FDF, DisallowedStd3Mapped, " \u{314}\u{342}", Unspecified),
    (0x1FE0, 0x1FE2, Valid, "", Unspecified),
    (0x1FE3, 0x1FE3, Mapped, "\u{3B0}", Unspecified),
    (0x1FE4, 0x1FE7, Valid, "", Unspecified),
    (0x1FE8, 0x1FE8, Mapped, "\u{1FE0}", Unspecified),
    (0x1FE9, 0x1FE9, Mapped, "\u{1FE1}", Unspecified),
    (0x1FEA, 0x1FEA, Mapped, "\u{1F7A}", Unspecified),
    (0x1FEB, 0x1FEB, Mapped, "\u{3CD}", Unspecified),
    (0x1FEC, 0x1FEC, Mapped, "\u{1FE5}", Unspecified),
    (0x1FED, 0x1FED, DisallowedStd3Mapped, " \u{308}\u{300}", Unspecified),
    (0x1FEE, 0x1FEE, DisallowedStd3Mapped, " \u{308}\u{301}", Unspecified),
    (0x1FEF, 0x1FEF, DisallowedStd3Mapped, "`", Unspecified),
    (0x1FF0, 0x1FF1, Disallowed, "", Unspecified),
    (0x1FF2, 0x1FF2, Mapped, "\u{1F7C}\u{3B9}", Unspecified),
    (0x1FF3, 0x1FF3, Mapped, "\u{3C9}\u{3B9}", Unspecified),
    (0x1FF4, 0x1FF4, Mapped, "\u{3CE}\u{3B9}", Unspecified),
    (0x1FF5, 0x1FF5, Disallowed, "", Unspecified),
    (0x1FF6, 0x1FF6, Valid, "", Unspecified),
    (0x1FF7, 0x1FF7, Mapped, "\u{1FF6}\u{3B9}", Unspecified),
    (0x1FF8, 0x1FF8, Mapped, "\u{1F78}", Unspecified),
    (0x1FF9, 0x1FF9, Mapped, "\u{3CC}", Unspecified),
    (0x1FFA, 0x1FFA, Mapped, "\u{1F7C}", Unspecified),
    (0x1FFB, 0x1FFB, Mapped, "\u{3CE}", Unspecified),
    (0x1FFC, 0x1FFC, Mapped, "\u{3C9}\u{3B9}", Unspecified),
    (0x1FFD, 0x1FFD, DisallowedStd3Mapped, " \u{301}", Unspecified),
    (0x1FFE, 0x1FFE, DisallowedStd3Mapped, " \u{314}", Unspecified),
    (0x1FFF, 0x1FFF, Disallowed, "", Unspecified),
    (0x2000, 0x200A, DisallowedStd3Mapped, " ", Unspecified),
    (0x200B, 0x200B, Ignored, "", Unspecified),
    (0x200C, 0x200D, Deviation, "", Unspecified),
    (0x200E, 0x200F, Disallowed, "", Unspecified),
    (0x2010, 0x2010, Valid, "", Nv8),
    (0x2011, 0x2011, Mapped, "\u{2010}", Unspecified),
    (0x2012, 0x2016, Valid, "", Nv8),
    (0x2017, 0x2017, DisallowedStd3Mapped, " \u{333}", Unspecified),
    (0x2018, 0x2023, Valid, "", Nv8),
    (0x2024, 0x2026, Disallowed, "", Unspecified),
    (0x2027, 0x2027, Valid, "", Nv8),
    (0x2028, 0x202E, Disallowed, "", Unspecified),
    (0x202F, 0x202F, DisallowedStd3Mapped, " ", Unspecified),
    (0x2030, 0x2032, Valid, "", Nv8),
    (0x2033, 0x2033, Mapped, "\u{2032}\u{2032}", Unspecified),
    (0x2034, 0x2034, Mapped, "\u{2032}\u{2032}\u{2032}", Unspecified),
    (0x2035, 0x2035, Valid, "", Nv8),
    (0x2036, 0x2036, Mapped, "\u{2035}\u{2035}", Unspecified),
    (0x2037, 0x2037, Mapped, "\u{2035}\u{2035}\u{2035}", Unspecified),
    (0x2038, 0x203B, Valid, "", Nv8),
    (0x203C, 0x203C, DisallowedStd3Mapped, "!!", Unspecified),
    (0x203D, 0x203D, Valid, "", Nv8),
    (0x203E, 0x203E, DisallowedStd3Mapped, " \u{305}", Unspecified),
    (0x203F, 0x2046, Valid, "", Nv8),
    (0x2047, 0x2047, DisallowedStd3Mapped, "??", Unspecified),
    (0x2048, 0x2048, DisallowedStd3Mapped, "?!", Unspecified),
    (0x2049, 0x2049, DisallowedStd3Mapped, "!?", Unspecified),
    (0x204A, 0x2056, Valid, "", Nv8),
    (0x2057, 0x2057, Mapped, "\u{2032}\u{2032}\u{2032}\u{2032}", Unspecified),
    (0x2058, 0x205E, Valid, "", Nv8),
    (0x205F, 0x205F, DisallowedStd3Mapped, " ", Unspecified),
    (0x2060, 0x2060, Ignored, "", Unspecified),
    (0x2061, 0x2063, Disallowed, "", Unspecified),
    (0x2064, 0x2064, Ignored, "", Unspecified),
    (0x2065, 0x206F, Disallowed, "", Unspecified),
    (0x2070, 0x2070, Mapped, "0", Unspecified),
    (0x2071, 0x2071, Mapped, "i", Unspecified),
    (0x2072, 0x2073, Disallowed, "", Unspecified),
    (0x2074, 0x2074, Mapped, "4", Unspecified),
    (0x2075, 0x2075, Mapped, "5", Unspecified),
    (0x2076, 0x2076, Mapped, "6", Unspecified),
    (0x2077, 0x2077, Mapped, "7", Unspecified),
    (0x2078, 0x2078, Mapped, "8", Unspecified),
    (0x2079, 0x2079, Mapped, "9", Unspecified),
    (0x207A, 0x207A, DisallowedStd3Mapped, "+", Unspecified),
    (0x207B, 0x207B, Mapped, "\u{2212}", Unspecified),
    (0x207C, 0x207C, DisallowedStd3Mapped, "=", Unspecified),
    (0x207D, 0x207D, DisallowedStd3Mapped, "(", Unspecified),
    (0x207E, 0x207E, DisallowedStd3Mapped, ")", Unspecified),
    (0x207F, 0x207F, Mapped, "n", Unspecified),
    (0x2080, 0x2080, Mapped, "0", Unspecified),
    (0x2081, 0x2081, Mapped, "1", Unspecified),
    (0x2082, 0x2082, Mapped, "2", Unspecified),
    (0x2083, 0x2083, Mapped, "3", Unspecified),
    (0x2084, 0x2084, Mapped, "4", Unspecified),
    (0x2085, 0x2085, Mapped, "5", Unspecified),
    (0x2086, 0x2086, Mapped, "6", Unspecified),
    (0x2087, 0x2087, Mapped, "7", Unspecified),
    (0x2088, 0x2088, Mapped, "8", Unspecified),
    (0x2089, 0x2089, Mapped, "9", Unspecified),
    (0x208A, 0x208A, DisallowedStd3Mapped, "+", Unspecified),
    (0x208B, 0x208B, Mapped, "\u{2212}", Unspecified),
    (0x208C, 0x208C, DisallowedStd3Mapped, "=", Unspecified),
    (0x208D, 0x208D, DisallowedStd3Mapped, "(", Unspecified),
    (0x208E, 0x208E, DisallowedStd3Mapped, ")", Unspecified),
    (0x208F, 0x208F, Disallowed, "", Unspecified),
    (0x2090, 0x2090, Mapped, "a", Unspecified),
    (0x2091, 0x2091, Mapped, "e", Unspecified),
    (0x2092, 0x2092, Mapped, "o", Unspecified),
    (0x2093, 0x2093, Mapped, "x", Unspecified),
    (0x2094, 0x2094, Mapped, "\u{259}", Unspecified),
    (0x2095, 0x2095, Mapped, "h", Unspecified),
    (0x2096, 0x2096, Mapped, "k", Unspecified),
    (0x2097, 0x2097, Mapped, "l", Unspecified),
    (0x2098, 0x2098, Mapped, "m", Unspecified),
    (0x2099, 0x2099, Mapped, "n", Unspecified),
    (0x209A, 0x209A, Mapped, "p", Unspecified),
    (0x209B, 0x209B, Mapped, "s", Unspecified),
    (0x209C, 0x209C, Mapped, "t", Unspecified),
    (0x209D, 0x209F, Disallowed, "", Unspecified),
    (0x20A0, 0x20A7, Valid, "", Nv8),
    (0x20A8, 0x20A8, Mapped, "rs", Unspecified),
    (0x20A9, 0x20BF, Valid, "", Nv8),
    (0x20C0, 0x20CF, Disallowed, "", Unspecified),
    (0x20D0, 0x20F0, Valid, "", Nv8),
    (0x20F1, 0x20FF, Disallowed, "", Unspecified),
    (0x2100, 0x2100, DisallowedStd3Mapped, "a/c", Unspecified),
    (0x2101, 0x2101, DisallowedStd3Mapped, "a/s", Unspecified),
    (0x2102, 0x2102, Mapped, "c", Unspecified),
    (0x2103, 0x2103, Mapped, "\u{B0}c", Unspecified),
    (0x2104, 0x2104, Valid, "", Nv8),
    (0x2105, 0x2105, DisallowedStd3Mapped, "c/o", Unspecified),
    (0x2106, 0x2106, DisallowedStd3Mapped, "c/u", Unspecified),
    (0x2107, 0x2107, Mapped, "\u{25B}", Unspecified),
    (0x2108, 0x2108, Valid, "", Nv8),
    (0x2109, 0x2109, Mapped, "\u{B0}f", Unspecified),
    (0x210A, 0x210A, Mapped, "g", Unspecified),
    (0x210B, 0x210E, Mapped, "h", Unspecified),
    (0x210F, 0x210F, Mapped, "\u{127}", Unspecified),
    (0x2110, 0x2111, Mapped, "i", Unspecified),
    (0x2112, 0x2113, Mapped, "l", Unspecified),
    (0x2114, 0x2114, Valid, "", Nv8),
    (0x2115, 0x2115, Mapped, "n", Unspecified),
    (0x2116, 0x2116, Mapped, "no", Unspecified),
    (0x2117, 0x2118, Valid, "", Nv8),
    (0x2119, 0x2119, Mapped, "p", Unspecified),
    (0x211A, 0x211A, Mapped, "q", Unspecified),
    (0x211B, 0x211D, Mapped, "r", Unspecified),
    (0x211E, 0x211F, Valid, "", Nv8),
    (0x2120, 0x2120, Mapped, "sm", Unspecified),
    (0x2121, 0x2121, Mapped, "tel", Unspecified),
    (0x2122, 0x2122, Mapped, "tm", Unspecified),
    (0x2123, 0x2123, Valid, "", Nv8),
    (0x2124, 0x2124, Mapped, "z", Unspecified),
    (0x2125, 0x2125, Valid, "", Nv8),
    (0x2126, 0x2126, Mapped, "\u{3C9}", Unspecified),
    (0x2127, 0x2127, Valid, "", Nv8),
    (0x2128, 0x2128, Mapped, "z", Unspecified),
    (0x2129, 0x2129, Valid, "", Nv8),
    (0x212A, 0x212A, Mapped, "k", Unspecified),
    (0x212B, 0x212B, Mapped, "\u{E5}", Unspecified),
    (0x212C, 0x212C, Mapped, "b", Unspecified),
    (0x212D, 0x212D, Mapped, "c", Unspecified),
    (0x212E, 0x212E, Valid, "", Nv8),
    (0x212F, 0x2130, Mapped, "e", Unspecified),
    (0x2131, 0x2131, Mapped, "f", Unspecified),
    (0x2132, 0x2132, Disallowed, "", Unspecified),
    (0x2133, 0x2133, Mapped, "m", Unspecified),
    (0x2134, 0x2134, Mapped, "o", Unspecified),
    (0x2135, 0x2135, Mapped, "\u{5D0}", Unspecified),
    (0x2136, 0x2136, Mapped, "\u{5D1}", Unspecified),
    (0x2137, 0x2137, Mapped, "\u{5D2}", Unspecified),
    (0x2138, 0x2138, Mapped, "\u{5D3}", Unspecified),
    (0x2139, 0x2139, Mapped, "i", Unspecified),
    (0x213A, 0x213A, Valid, "", Nv8),
    (0x213B, 0x213B, Mapped, "fax", Unspecified),
    (0x213C, 0x213C, Mapped, "\u{3C0}", Unspecified),
    (0x213D, 0x213E, Mapped, "\u{3B3}", Unspecified),
    (0x213F, 0x213F, Mapped, "\u{3C0}", Unspecified),
    (0x2140, 0x2140, Mapped, "\u{2211}", Unspecified),
    (0x2141, 0x2144, Valid, "", Nv8),
    (0x2145, 0x2146, Mapped, "d", Unspecified),
    (0x2147, 0x2147, Mapped, "e", Unspecified),
    (0x2148, 0x2148, Mapped, "i", Unspecified),
    (0x2149, 0x2149, Mapped, "j", Unspecified),
    (0x214A, 0x214D, Valid, "", Nv8),
    (0x214E, 0x214E, Valid, "", Unspecified),
    (0x214F, 0x214F, Valid, "", Nv8),
    (0x2150, 0x2150, Mapped, "1\u{2044}7", Unspecified),
    (0x2151, 0x2151, Mapped, "1\u{2044}9", Unspecified),
    (0x2152, 0x2152, Mapped, "1\u{2044}10", Unspecified),
    (0x2153, 0x2153, Mapped, "1\u{2044}3", Unspecified),
    (0x2154, 0x2154, Mapped, "2\u{2044}3", Unspecified),
    (0x2155, 0x2155, Mapped, "1\u{2044}5", Unspecified),
    (0x2156, 0x2156, Mapped, "2\u{2044}5", Unspecified),
    (0x2157, 0x2157, Mapped, "3\u{2044}5", Unspecified),
    (0x2158, 0x2158, Mapped, "4\u{2044}5", Unspecified),
    (0x2159, 0x2159, Mapped, "1\u{2044}6", Unspecified),
    (0x215A, 0x215A, Mapped, "5\u{2044}6", Unspecified),
    (0x215B, 0x215B, Mapped, "1\u{2044}8", Unspecified),
    (0x215C, 0x215C, Mapped, "3\u{2044}8", Unspecified),
    (0x215D, 0x215D, Mapped, "5\u{2044}8", Unspecified),
    (0x215E, 0x215E, Mapped, "7\u{2044}8", Unspecified),
    (0x215F, 0x215F, Mapped, "1\u{2044}", Unspecified),
    (0x2160, 0x2160, Mapped, "i", Unspecified),
    (0x2161, 0x2161, Mapped, "ii", Unspecified),
    (0x2162, 0x2162, Mapped, "iii", Unspecified),
    (0x2163, 0x2163, Mapped, "iv", Unspecified),
    (0x2164, 0x2164, Mapped, "v", Unspecified),
    (0x2165, 0x2165, Mapped, "vi", Unspecified),
    (0x2166, 0x2166, Mapped, "vii", Unspecified),
    (0x2167, 0x2167, Mapped, "viii", Unspecified),
    (0x2168, 0x2168, Mapped, "ix", Unspecified),
    (0x2169, 0x2169, Mapped, "x", Unspecified),
    (0x216A, 0x216A, Mapped, "xi", Unspecified),
    (0x216B, 0x216B, Mapped, "xii", Unspecified),
    (0x216C, 0x216C, Mapped, "l", Unspecified),
    (0x216D, 0x216D, Mapped, "c", Unspecified),
    (0x216E, 0x216E, Mapped, "d", Unspecified),
    (0x216F, 0x216F, Mapped, "m", Unspecified),
    (0x2170, 0x2170, Mapped, "i", Unspecified),
    (0x2171, 0x2171, Mapped, "ii", Unspecified),
    (0x2172, 0x2172, Mapped, "iii", Unspecified),
    (0x2173, 0x2173, Mapped, "iv", Unspecified),
    (0x2174, 0x2174, Mapped, "v", Unspecified),
    (0x2175, 0x2175, Mapped, "vi", Unspecified),
    (0x2176, 0x2176, Mapped, "vii", Unspecified),
    (0x2177, 0x2177, Mapped, "viii", Unspecified),
    (0x2178, 0x2178, Mapped, "ix", Unspecified),
    (0x2179, 0x2179, Mapped, "x", Unspecified),
    (0x217A, 0x217A, Mapped, "xi", Unspecified),
    (0x217B, 0x217B, Mapped, "xii", Unspecified),
    (0x217C, 0x217C, Mapped, "l", Unspecified),
    (0x217D, 0x217D, Mapped, "c", Unspecified),
    (0x217E, 0x217E, Mapped, "d", Unspecified),
    (0x217F, 0x217F, Mapped, "m", Unspecified),
    (0x2180, 0x2182, Valid, "", Nv8),
    (0x2183, 0x2183, Disallowed, "", Unspecified),
    (0x2184, 0x2184, Valid, "", Unspecified),
    (0x2185, 0x2188, Valid, "", Nv8),
    (0x2189, 0x2189, Mapped, "0\u{2044}3", Unspecified),
    (0x218A, 0x218B, Valid, "", Nv8),
    (0x218C, 0x218F, Disallowed, "", Unspecified),
    (0x2190, 0x222B, Valid, "", Nv8),
    (0x222C, 0x222C, Mapped, "\u{222B}\u{222B}", Unspecified),
    (0x222D, 0x222D, Mapped, "\u{222B}\u{222B}\u{222B}", Unspecified),
    (0x222E, 0x222E, Valid, "", Nv8),
    (0x222F, 0x222F, Mapped, "\u{222E}\u{222E}", Unspecified),
    (0x2230, 0x2230, Mapped, "\u{222E}\u{222E}\u{222E}", Unspecified),
    (0x2231, 0x225F, Valid, "", Nv8),
    (0x2260, 0x2260, DisallowedStd3Valid, "", Unspecified),
    (0x2261, 0x226D, Valid, "", Nv8),
    (0x226E, 0x226F, DisallowedStd3Valid, "", Unspecified),
    (0x2270, 0x2328, Valid, "", Nv8),
    (0x2329, 0x2329, Mapped, "\u{3008}", Unspecified),
    (0x232A, 0x232A, Mapped, "\u{3009}", Unspecified),
    (0x232B, 0x2426, Valid, "", Nv8),
    (0x2427, 0x243F, Disallowed, "", Unspecified),
    (0x2440, 0x244A, Valid, "", Nv8),
    (0x244B, 0x245F, Disallowed, "", Unspecified),
    (0x2460, 0x2460, Mapped, "1", Unspecified),
    (0x2461, 0x2461, Mapped, "2", Unspecified),
    (0x2462, 0x2462, Mapped, "3", Unspecified),
    (0x2463, 0x2463, Mapped, "4", Unspecified),
    (0x2464, 0x2464, Mapped, "5", Unspecified),
    (0x2465, 0x2465, Mapped, "6", Unspecified),
    (0x2466, 0x2466, Mapped, "7", Unspecified),
    (0x2467, 0x2467, Mapped, "8", Unspecified),
    (0x2468, 0x2468, Mapped, "9", Unspecified),
    (0x2469, 0x2469, Mapped, "10", Unspecified),
    (0x246A, 0x246A, Mapped, "11", Unspecified),
    (0x246B, 0x246B, Mapped, "12", Unspecified),
    (0x246C, 0x246C, Mapped, "13", Unspecified),
    (0x246D, 0x246D, Mapped, "14", Unspecified),
    (0x246E, 0x246E, Mapped, "15", Unspecified),
    (0x246F, 0x246F, Mapped, "16", Unspecified),
    (0x2470, 0x2470, Mapped, "17", Unspecified),
    (0x2471, 0x2471, Mapped, "18", Unspecified),
    (0x2472, 0x2472, Mapped, "19", Unspecified),
    (0x2473, 0x2473, Mapped, "20", Unspecified),
    (0x2474, 0x2474, DisallowedStd3Mapped, "(1)", Unspecified),
    (0x2475, 0x2475, DisallowedStd3Mapped, "(2)", Unspecified),
    (0x2476, 0x2476, DisallowedStd3Mapped, "(3)", Unspecified),
    (0x2477, 0x2477, DisallowedStd3Mapped, "(4)", Unspecified),
    (0x2478, 0x2478, DisallowedStd3Mapped, "(5)", Unspecified),
    (0x2479, 0x2479, DisallowedStd3Mapped, "(6)", Unspecified),
    (0x247A, 0x247A, DisallowedStd3Mapped, "(7)", Unspecified),
    (0x247B, 0x247B, DisallowedStd3Mapped, "(8)", Unspecified),
    (0x247C, 0x247C, DisallowedStd3Mapped, "(9)", Unspecified),
    (0x247D, 0x247D, DisallowedStd3Mapped, "(10)", Unspecified),
    (0x247E, 0x247E, DisallowedStd3Mapped, "(11)", Unspecified),
    (0x247F, 0x247F, DisallowedStd3Mapped, "(12)", Unspecified),
    (0x2480, 0x2480, DisallowedStd3Mapped, "(13)", Unspecified),
    (0x2481, 0x2481, DisallowedStd3Mapped, "(14)", Unspecified),
    (0x2482, 0x2482, DisallowedStd3Mapped, "(15)", Unspecified),
    (0x2483, 0x2483, DisallowedStd3Mapped, "(16)", Unspecified),
    (0x2484, 0x2484, DisallowedStd3Mapped, "(17)", Unspecified),
    (0x2485, 0x2485, DisallowedStd3Mapped, "(18)", Unspecified),
    (0x2486, 0x2486, DisallowedStd3Mapped, "(19)", Unspecified),
    (0x2487, 0x2487, DisallowedStd3Mapped, "(20)", Unspecified),
    (0x2488, 0x249B, Disallowed, "", Unspecified),
    (0x249C, 0x249C, DisallowedStd3Mapped, "(a)", Unspecified),
    (0x249D, 0x249D, DisallowedStd3Mapped, "(b)", Unspecified),
    (0x249E, 0x249E, DisallowedStd3Mapped, "(c)", Unspecified),
    (0x249F, 0x249F, DisallowedStd3Mapped, "(d)", Unspecified),
    (0x24A0, 0x24A0, DisallowedStd3Mapped, "(e)", Unspecified),
    (0x24A1, 0x24A1, DisallowedStd3Mapped, "(f)", Unspecified),
    (0x24A2, 0x24A2, DisallowedStd3Mapped, "(g)", Unspecified),
    (0x24A3, 0x24A3, DisallowedStd3Mapped, "(h)", Unspecified),
    (0x24A4, 0x24A4, DisallowedStd3Mapped, "(i)", Unspecified),
    (0x24A5, 0x24A5, DisallowedStd3Mapped, "(j)", Unspecified),
    (0x24A6, 0x24A6, DisallowedStd3Mapped, "(k)", Unspecified),
    (0x24A7, 0x24A7, DisallowedStd3Mapped, "(l)", Unspecified),
    (0x24A8, 0x24A8, DisallowedStd3Mapped, "(m)", Unspecified),
    (0x24A9, 0x24A9, DisallowedStd3Mapped, "(n)", Unspecified),
    (0x24AA, 0x24AA, DisallowedStd3Mapped, "(o)", Unspecified),
    (0x24AB, 0x24AB, DisallowedStd3Mapped, "(p)", Unspecified),
    (0x24AC, 0x24AC, DisallowedStd3Mapped, "(q)", Unspecified),
    (0x24AD, 0x24AD, DisallowedStd3Mapped, "(r)", Unspecified),
    (0x24AE, 0x24AE, DisallowedStd3Mapped, "(s)", Unspecified),
    (0x24AF, 0x24AF, DisallowedStd3Mapped, "(t)", Unspecified),
    (0x24B0, 0x24B0, DisallowedStd3Mapped, "(u)", Unspecified),
    (0x24B1, 0x24B1, DisallowedStd3Mapped, "(v)", Unspecified),
    (0x24B2, 0x24B2, DisallowedStd3Mapped, "(w)", Unspecified),
    (0x24B3, 0x24B3, DisallowedStd3Mapped, "(x)", Unspecified),
    (0x24B4, 0x24B4, DisallowedStd3Mapped, "(y)", Unspecified),
    (0x24B5, 0x24B5, DisallowedStd3Mapped, "(z)", Unspecified),
    (0x24B6, 0x24B6, Mapped, "a", Unspecified),
    (0x24B7, 0x24B7, Mapped, "b", Unspecified),
    (0x24B8, 0x24B8, Mapped, "c", Unspecified),
    (0x24B9, 0x24B9, Mapped, "d", Unspecified),
    (0x24BA, 0x24BA, Mapped, "e", Unspecified),
    (0x24BB, 0x24BB, Mapped, "f", Unspecified),
    (0x24BC, 0x24BC, Mapped, "g", Unspecified),
    (0x24BD, 0x24BD, Mapped, "h", Unspecified),
    (0x24BE, 0x24BE, Mapped, "i", Unspecified),
    (0x24BF, 0x24BF, Mapped, "j", Unspecified),
    (0x24C0, 0x24C0, Mapped, "k", Unspecified),
    (0x24C1, 0x24C1, Mapped, "l", Unspecified),
    (0x24C2, 0x24C2, Mapped, "m", Unspecified),
    (0x24C3, 0x24C3, Mapped, "n", Unspecified),
    (0x24C4, 0x24C4, Mapped, "o", Unspecified),
    (0x24C5, 0x24C5, Mapped, "p", Unspecified),
    (0x24C6, 0x24C6, Mapped, "q", Unspecified),
    (0x24C7, 0x24C7, Mapped, "r", Unspecified),
    (0x24C8, 0x24C8, Mapped, "s", Unspecified),
    (0x24C9, 0x24C9, Mapped, "t", Unspecified),
    (0x24CA, 0x24CA, Mapped, "u", Unspecified),
    (0x24CB, 0x24CB, Mapped, "v", Unspecified),
    (0x24CC, 0x24CC, Mapped, "w", Unspecified),
    (0x24CD, 0x24CD, Mapped, "x", Unspecified),
    (0x24CE, 0x24CE, Mapped, "y", Unspecified),
    (0x24CF, 0x24CF, Mapped, "z", Unspecified),
    (0x24D0, 0x24D0, Mapped, "a", Unspecified),
    (0x24D1, 0x24D1, Mapped, "b", Unspecified),
    (0x24D2, 0x24D2, Mapped, "c", Unspecified),
    (0x24D3, 0x24D3, Mapped, "d", Unspecified),
    (0x24D4, 0x24D4, Mapped, "e", Unspecified),
    (0x24D5, 0x24D5, Mapped, "f", Unspecified),
    (0x24D6, 0x24D6, Mapped, "g", Unspecified),
    (0x24D7, 0x24D7, Mapped, "h", Unspecified),
    (0x24D8, 0x24D8, Mapped, "i", Unspecified),
    (0x24D9, 0x24D9, Mapped, "j", Unspecified),
    (0x24DA, 0x24DA, Mapped, "k", Unspecified),
    (0x24DB, 0x24DB, Mapped, "l", Unspecified),
    (0x24DC, 0x24DC, Mapped, "m", Unspecified),
    (0x24DD, 0x24DD, Mapped, "n", Unspecified),
    (0x24DE, 0x24DE, Mapped, "o", Unspecified),
    (0x24DF, 0x24DF, Mapped, "p", Unspecified),
    (0x24E0, 0x24E0, Mapped, "q", Unspecified),
    (0x24E1, 0x24E1, Mapped, "r", Unspecified),
    (0x24E2, 0x24E2, Mapped, "s", Unspecified),
    (0x24E3, 0x24E3, Mapped, "t", Unspecified),
    (0x24E4, 0x24E4, Mapped, "u", Unspecified),
    (0x24E5, 0x24E5, Mapped, "v", Unspecified),
    (0x24E6, 0x24E6, Mapped, "w", Unspecified),
    (0x24E7, 0x24E7, Mapped, "x", Unspecified),
    (0x24E8, 0x24E8, Mapped, "y", Unspecified),
    (0x24E9, 0x24E9, Mapped, "z", Unspecified),
    (0x24EA, 0x24EA, Mapped, "0", Unspecified),
    (0x24EB, 0x2A0B, Valid, "", Nv8),
    (0x2A0C, 0x2A0C, Mapped, "\u{222B}\u{222B}\u{222B}\u{222B}", Unspecified),
    (0x2A0D, 0x2A73, Valid, "", Nv8),
    (0x2A74, 0x2A74, DisallowedStd3Mapped, "::=", Unspecified),
    (0x2A75, 0x2A75, DisallowedStd3Mapped, "==", Unspecified),
    (0x2A76, 0x2A76, DisallowedStd3Mapped, "===", Unspecified),
    (0x2A77, 0x2ADB, Valid, "", Nv8),
    (0x2ADC, 0x2ADC, Mapped, "\u{2ADD}\u{338}", Unspecified),
    (0x2ADD, 0x2B73, Valid, "", Nv8),
    (0x2B74, 0x2B75, Disallowed, "", Unspecified),
    (0x2B76, 0x2B95, Valid, "", Nv8),
    (0x2B96, 0x2B96, Disallowed, "", Unspecified),
    (0x2B97, 0x2BFF, Valid, "", Nv8),
    (0x2C00, 0x2C00, Mapped, "\u{2C30}", Unspecified),
    (0x2C01, 0x2C01, Mapped, "\u{2C31}", Unspecified),
    (0x2C02, 0x2C02, Mapped, "\u{2C32}", Unspecified),
    (0x2C03, 0x2C03, Mapped, "\u{2C33}", Unspecified),
    (0x2C04, 0x2C04, Mapped, "\u{2C34}", Unspecified),
    (0x2C05, 0x2C05, Mapped, "\u{2C35}", Unspecified),
    (0x2C06, 0x2C06, Mapped, "\u{2C36}", Unspecified),
    (0x2C07, 0x2C07, Mapped, "\u{2C37}", Unspecified),
    (0x2C08, 0x2C08, Mapped, "\u{2C38}", Unspecified),
    (0x2C09, 0x2C09, Mapped, "\u{2C39}", Unspecified),
    (0x2C0A, 0x2C0A, Mapped, "\u{2C3A}", Unspecified),
    (0x2C0B, 0x2C0B, Mapped, "\u{2C3B}", Unspecified),
    (0x2C0C, 0x2C0C, Mapped, "\u{2C3C}", Unspecified),
    (0x2C0D, 0x2C0D, Mapped, "\u{2C3D}", Unspecified),
    (0x2C0E, 0x2C0E, Mapped, "\u{2C3E}", Unspecified),
    (0x2C0F, 0x2C0F, Mapped, "\u{2C3F}", Unspecified),
    (0x2C10, 0x2C10, Mapped, "\u{2C40}", Unspecified),
    (0x2C11, 0x2C11, Mapped, "\u{2C41}", Unspecified),
    (0x2C12, 0x2C12, Mapped, "\u{2C42}", Unspecified),
    (0x2C13, 0x2C13, Mapped, "\u{2C43}", Unspecified),
    (0x2C14, 0x2C14, Mapped, "\u{2C44}", Unspecified),
    (0x2C15, 0x2C15, Mapped, "\u{2C45}", Unspecified),
    (0x2C16, 0x2C16, Mapped, "\u{2C46}", Unspecified),
    (0x2C17, 0x2C17, Mapped, "\u{2C47}", Unspecified),
    (0x2C18, 0x2C18, Mapped, "\u{2C48}", Unspecified),
    (0x2C19, 0x2C19, Mapped, "\u{2C49}", Unspecified),
    (0x2C1A, 0x2C1A, Mapped, "\u{2C4A}", Unspecified),
    (0x2C1B, 0x2C1B, Mapped, "\u{2C4B}", Unspecified),
    (0x2C1C, 0x2C1C, Mapped, "\u{2C4C}", Unspecified),
    (0x2C1D, 0x2C1D, Mapped, "\u{2C4D}", Unspecified),
    (0x2C1E, 0x2C1E, Mapped, "\u{2C4E}", Unspecified),
    (0x2C1F, 0x2C1F, Mapped, "\u{2C4F}", Unspecified),
    (0x2C20, 0x2C20, Mapped, "\u{2C50}", Unspecified),
    (0x2C21, 0x2C21, Mapped, "\u{2C51}", Unspecified),
    (0x2C22, 0x2C22, Mapped, "\u{2C52}", Unspecified),
    (0x2C23, 0x2C23, Mapped, "\u{2C53}", Unspecified),
    (0x2C24, 0x2C24, Mapped, "\u{2C54}", Unspecified),
    (0x2C25, 0x2C25, Mapped, "\u{2C55}", Unspecified),
    (0x2C26, 0x2C26, Mapped, "\u{2C56}", Unspecified),
    (0x2C27, 0x2C27, Mapped, "\u{2C57}", Unspecified),
    (0x2C28, 0x2C28, Mapped, "\u{2C58}", Unspecified),
    (0x2C29, 0x2C29, Mapped, "\u{2C59}", Unspecified),
    (0x2C2A, 0x2C2A, Mapped, "\u{2C5A}", Unspecified),
    (0x2C2B, 0x2C2B, Mapped, "\u{2C5B}", Unspecified),
    (0x2C2C, 0x2C2C, Mapped, "\u{2C5C}", Unspecified),
    (0x2C2D, 0x2C2D, Mapped, "\u{2C5D}", Unspecified),
    (0x2C2E, 0x2C2E, Mapped, "\u{2C5E}", Unspecified),
    (0x2C2F, 0x2C2F, Disallowed, "", Unspecified),
    (0x2C30, 0x2C5E, Valid, "", Unspecified),
    (0x2C5F, 0x2C5F, Disallowed, "", Unspecified),
    (0x2C60, 0x2C60, Mapped, "\u{2C61}", Unspecified),
    (0x2C61, 0x2C61, Valid, "", Unspecified),
    (0x2C62, 0x2C62, Mapped, "\u{26B}", Unspecified),
    (0x2C63, 0x2C63, Mapped, "\u{1D7D}", Unspecified),
    (0x2C64, 0x2C64, Mapped, "\u{27D}", Unspecified),
    (0x2C65, 0x2C66, Valid, "", Unspecified),
    (0x2C67, 0x2C67, Mapped, "\u{2C68}", Unspecified),
    (0x2C68, 0x2C68, Valid, "", Unspecified),
    (0x2C69, 0x2C69, Mapped, "\u{2C6A}", Unspecified),
    (0x2C6A, 0x2C6A, Valid, "", Unspecified),
    (0x2C6B, 0x2C6B, Mapped, "\u{2C6C}", Unspecified),
    (0x2C6C, 0x2C6C, Valid, "", Unspecified),
    (0x2C6D, 0x2C6D, Mapped, "\u{251}", Unspecified),
    (0x2C6E, 0x2C6E, Mapped, "\u{271}", Unspecified),
    (0x2C6F, 0x2C6F, Mapped, "\u{250}", Unspecified),
    (0x2C70, 0x2C70, Mapped, "\u{252}", Unspecified),
    (0x2C71, 0x2C71, Valid, "", Unspecified),
    (0x2C72, 0x2C72, Mapped, "\u{2C73}", Unspecified),
    (0x2C73, 0x2C74, Valid, "", Unspecified),
    (0x2C75, 0x2C75, Mapped, "\u{2C76}", Unspecified),
    (0x2C76, 0x2C7B, Valid, "", Unspecified),
    (0x2C7C, 0x2C7C, Mapped, "j", Unspecified),
    (0x2C7D, 0x2C7D, Mapped, "v", Unspecified),
    (0x2C7E, 0x2C7E, Mapped, "\u{23F}", Unspecified),
    (0x2C7F, 0x2C7F, Mapped, "\u{240}", Unspecified),
    (0x2C80, 0x2C80, Mapped, "\u{2C81}", Unspecified),
    (0x2C81, 0x2C81, Valid, "", Unspecified),
    (0x2C82, 0x2C82, Mapped, "\u{2C83}", Unspecified),
    (0x2C83, 0x2C83, Valid, "", Unspecified),
    (0x2C84, 0x2C84, Mapped, "\u{2C85}", Unspecified),
    (0x2C85, 0x2C85, Valid, "", Unspecified),
    (0x2C86, 0x2C86, Mapped, "\u{2C87}", Unspecified),
    (0x2C87, 0x2C87, Valid, "", Unspecified),
    (0x2C88, 0x2C88, Mapped, "\u{2C89}", Unspecified),
    (0x2C89, 0x2C89, Valid, "", Unspecified),
    (0x2C8A, 0x2C8A, Mapped, "\u{2C8B}", Unspecified),
    (0x2C8B, 0x2C8B, Valid, "", Unspecified),
    (0x2C8C, 0x2C8C, Mapped, "\u{2C8D}", Unspecified),
    (0x2C8D, 0x2C8D, Valid, "", Unspecified),
    (0x2C8E, 0x2C8E, Mapped, "\u{2C8F}", Unspecified),
    (0x2C8F, 0x2C8F, Valid, "", Unspecified),
    (0x2C90, 0x2C90, Mapped, "\u{2C91}", Unspecified),
    (0x2C91, 0x2C91, Valid, "", Unspecified),
    (0x2C92, 0x2C92, Mapped, "\u{2C93}", Unspecified),
    (0x2C93, 0x2C93, Valid, "", Unspecified),
    (0x2C94, 0x2C94, Mapped, "\u{2C95}", Unspecified),
    (0x2C95, 0x2C95, Valid, "", Unspecified),
    (0x2C96, 0x2C96, Mapped, "\u{2C97}", Unspecified),
    (0x2C97, 0x2C97, Valid, "", Unspecified),
    (0x2C98, 0x2C98, Mapped, "\u{2C99}", Unspecified),
    (0x2C99, 0x2C99, Valid, "", Unspecified),
    (0x2C9A, 0x2C9A, Mapped, "\u{2C9B}", Unspecified),
    (0x2C9B, 0x2C9B, Valid, "", Unspecified),
    (0x2C9C, 0x2C9C, Mapped, "\u{2C9D}", Unspecified),
    (0x2C9D, 0x2C9D, Valid, "", Unspecified),
    (0x2C9E, 0x2C9E, Mapped, "\u{2C9F}", Unspecified),
    (0x2C9F, 0x2C9F, Valid, "", Unspecified),
    (0x2CA0, 0x2CA0, Mapped, "\u{2CA1}", Unspecified),
    (0x2CA1, 0x2CA1, Valid, "", Unspecified),
    (0x2CA2, 0x2CA2, Mapped, "\u{2CA3}", Unspecified),
    (0x2CA3, 0x2CA3, Valid, "", Unspecified),
    (0x2CA4, 0x2CA4, Mapped, "\u{2CA5}", Unspecified),
    (0x2CA5, 0x2CA5, Valid, "", Unspecified),
    (0x2CA6, 0x2CA6, Mapped, "\u{2CA7}", Unspecified),
    (0x2CA7, 0x2CA7, Valid, "", Unspecified),
    (0x2CA8, 0x2CA8, Mapped, "\u{2CA9}", Unspecified),
    (0x2CA9, 0x2CA9, Valid, "", Unspecified),
    (0x2CAA, 0x2CAA, Mapped, "\u{2CAB}", Unspecified),
    (0x2CAB, 0x2CAB, Valid, "", Unspecified),
    (0x2CAC, 0x2CAC, Mapped, "\u{2CAD}", Unspecified),
    (0x2CAD, 0x2CAD, Valid, "", Unspecified),
    (0x2CAE, 0x2CAE, Mapped, "\u{2CAF}", Unspecified),
    (0x2CAF, 0x2CAF, Valid, "", Unspecified),
    (0x2CB0, 0x2CB0, Mapped, "\u{2CB1}", Unspecified),
    (0x2CB1, 0x2CB1, Valid, "", Unspecified),
    (0x2CB2, 0x2CB2, Mapped, "\u{2CB3}", Unspecified),
    (0x2CB3, 0x2CB3, Valid, "", Unspecified),
    (0x2CB4, 0x2CB4, Mapped, "\u{2CB5}", Unspecified),
    (0x2CB5, 0x2CB5, Valid, "", Unspecified),
    (0x2CB6, 0x2CB6, Mapped, "\u{2CB7}", Unspecified),
    (0x2CB7, 0x2CB7, Valid, "", Unspecified),
    (0x2CB8, 0x2CB8, Mapped, "\u{2CB9}", Unspecified),
    (0x2CB9, 0x2CB9, Valid, "", Unspecified),
    (0x2CBA, 0x2CBA, Mapped, "\u{2CBB}", Unspecified),
    (0x2CBB, 0x2CBB, Valid, "", Unspecified),
    (0x2CBC, 0x2CBC, Mapped, "\u{2CBD}", Unspecified),
    (0x2CBD, 0x2CBD, Valid, "", Unspecified),
    (0x2CBE, 0x2CBE, Mapped, "\u{2CBF}", Unspecified),
    (0x2CBF, 0x2CBF, Valid, "", Unspecified),
    (0x2CC0, 0x2CC0, Mapped, "\u{2CC1}", Unspecified),
    (0x2CC1, 0x2CC1, Valid, "", Unspecified),
    (0x2CC2, 0x2CC2, Mapped, "\u{2CC3}", Unspecified),
    (0x2CC3, 0x2CC3, Valid, "", Unspecified),
    (0x2CC4, 0x2CC4, Mapped, "\u{2CC5}", Unspecified),
    (0x2CC5, 0x2CC5, Valid, "", Unspecified),
    (0x2CC6, 0x2CC6, Mapped, "\u{2CC7}", Unspecified),
    (0x2CC7, 0x2CC7, Valid, "", Unspecified),
    (0x2CC8, 0x2CC8, Mapped, "\u{2CC9}", Unspecified),
    (0x2CC9, 0x2CC9, Valid, "", Unspecified),
    (0x2CCA, 0x2CCA, Mapped, "\u{2CCB}", Unspecified),
    (0x2CCB, 0x2CCB, Valid, "", Unspecified),
    (0x2CCC, 0x2CCC, Mapped, "\u{2CCD}", Unspecified),
    (0x2CCD, 0x2CCD, Valid, "", Unspecified),
    (0x2CCE, 0x2CCE, Mapped, "\u{2CCF}", Unspecified),
    (0x2CCF, 0x2CCF, Valid, "", Unspecified),
    (0x2CD0, 0x2CD0, Mapped, "\u{2CD1}", Unspecified),
    (0x2CD1, 0x2CD1, Valid, "", Unspecified),
    (0x2CD2, 0x2CD2, Mapped, "\u{2CD3}", Unspecified),
    (0x2CD3, 0x2CD3, Valid, "", Unspecified),
    (0x2CD4, 0x2CD4, Mapped, "\u{2CD5}", Unspecified),
    (0x2CD5, 0x2CD5, Valid, "", Unspecified),
    (0x2CD6, 0x2CD6, Mapped, "\u{2CD7}", Unspecified),
    (0x2CD7, 0x2CD7, Valid, "", Unspecified),
    (0x2CD8, 0x2CD8, Mapped, "\u{2CD9}", Unspecified),
    (0x2CD9, 0x2CD9, Valid, "", Unspecified),
    (0x2CDA, 0x2CDA, Mapped, "\u{2CDB}", Unspecified),
    (0x2CDB, 0x2CDB, Valid, "", Unspecified),
    (0x2CDC, 0x2CDC, Mapped, "\u{2CDD}", Unspecified),
    (0x2CDD, 0x2CDD, Valid, "", Unspecified),
    (0x2CDE, 0x2CDE, Mapped, "\u{2CDF}", Unspecified),
    (0x2CDF, 0x2CDF, Valid, "", Unspecified),
    (0x2CE0, 0x2CE0, Mapped, "\u{2CE1}", Unspecified),
    (0x2CE1, 0x2CE1, Valid, "", Unspecified),
    (0x2CE2, 0x2CE2, Mapped, "\u{2CE3}", Unspecified),
    (0x2CE3, 0x2CE4, Valid, "", Unspecified),
    (0x2CE5, 0x2CEA, Valid, "", Nv8),
    (0x2CEB, 0x2CEB, Mapped, "\u{2CEC}", Unspecified),
    (0x2CEC, 0x2CEC, Valid, "", Unspecified),
    (0x2CED, 0x2CED, Mapped, "\u{2CEE}", Unspecified),
    (0x2CEE, 0x2CF1, Valid, "", Unspecified),
    (0x2CF2, 0x2CF2, Mapped, "\u{2CF3}", Unspecified),
    (0x2CF3, 0x2CF3, Valid, "", Unspecified),
    (0x2CF4, 0x2CF8, Disallowed, "", Unspecified),
    (0x2CF9, 0x2CFF, Valid, "", Nv8),
    (0x2D00, 0x2D25, Valid, "", Unspecified),
    (0x2D26, 0x2D26, Disallowed, "", Unspecified),
    (0x2D27, 0x2D27, Valid, "", Unspecified),
    (0x2D28, 0x2D2C, Disallowed, "", Unspecified),
    (0x2D2D, 0x2D2D, Valid, "", Unspecified),
    (0x2D2E, 0x2D2F, Disallowed, "", Unspecified),
    (0x2D30, 0x2D67, Valid, "", Unspecified),
    (0x2D68, 0x2D6E, Disallowed, "", Unspecified),
    (0x2D6F, 0x2D6F, Mapped, "\u{2D61}", Unspecified),
    (0x2D70, 0x2D70, Valid, "", Nv8),
    (0x2D71, 0x2D7E, Disallowed, "", Unspecified),
    (0x2D7F, 0x2D96, Valid, "", Unspecified),
    (0x2D97, 0x2D9F, Disallowed, "", Unspecified),
    (0x2DA0, 0x2DA6, Valid, "", Unspecified),
    (0x2DA7, 0x2DA7, Disallowed, "", Unspecified),
    (0x2DA8, 0x2DAE, Valid, "", Unspecified),
    (0x2DAF, 0x2DAF, Disallowed, "", Unspecified),
    (0x2DB0, 0x2DB6, Valid, "", Unspecified),
    (0x2DB7, 0x2DB7, Disallowed, "", Unspecified),
    (0x2DB8, 0x2DBE, Valid, "", Unspecified),
    (0x2DBF, 0x2DBF, Disallowed, "", Unspecified),
    (0x2DC0, 0x2DC6, Valid, "", Unspecified),
    (0x2DC7, 0x2DC7, Disallowed, "", Unspecified),
    (0x2DC8, 0x2DCE, Valid, "", Unspecified),
    (0x2DCF, 0x2DCF, Disallowed, "", Unspecified),
    (0x2DD0, 0x2DD6, Valid, "", Unspecified),
    (0x2DD7, 0x2DD7, Disallowed, "", Unspecified),
    (0x2DD8, 0x2DDE, Valid, "", Unspecified),
    (0x2DDF, 0x2DDF, Disallowed, "", Unspecified),
    (0x2DE0, 0x2DFF, Valid, "", Unspecified),
    (0x2E00, 0x2E2E, Valid, "", Nv8),
    (0x2E2F, 0x2E2F, Valid, "", Unspecified),
    (0x2E30, 0x2E52, Valid, "", Nv8),
    (0x2E53, 0x2E7F, Disallowed, "", Unspecified),
    (0x2E80, 0x2E99, Valid, "", Nv8),
    (0x2E9A, 0x2E9A, Disallowed, "", Unspecified),
    (0x2E9B, 0x2E9E, Valid, "", Nv8),
    (0x2E9F, 0x2E9F, Mapped, "\u{6BCD}", Unspecified),
    (0x2EA0, 0x2EF2, Valid, "", Nv8),
    (0x2EF3, 0x2EF3, Mapped, "\u{9F9F}", Unspecified),
    (0x2EF4, 0x2EFF, Disallowed, "", Unspecified),
    (0x2F00, 0x2F00, Mapped, "\u{4E00}", Unspecified),
    (0x2F01, 0x2F01, Mapped, "\u{4E28}", Unspecified),
    (0x2F02, 0x2F02, Mapped, "\u{4E36}", Unspecified),
    (0x2F03, 0x2F03, Mapped, "\u{4E3F}", Unspecified),
    (0x2F04, 0x2F04, Mapped, "\u{4E59}", Unspecified),
    (0x2F05, 0x2F05, Mapped, "\u{4E85}", Unspecified),
    (0x2F06, 0x2F06, Mapped, "\u{4E8C}", Unspecified),
    (0x2F07, 0x2F07, Mapped, "\u{4EA0}", Unspecified),
    (0x2F08, 0x2F08, Mapped, "\u{4EBA}", Unspecified),
    (0x2F09, 0x2F09, Mapped, "\u{513F}", Unspecified),
    (0x2F0A, 0x2F0A, Mapped, "\u{5165}", Unspecified),
    (0x2F0B, 0x2F0B, Mapped, "\u{516B}", Unspecified),
    (0x2F0C, 0x2F0C, Mapped, "\u{5182}", Unspecified),
    (0x2F0D, 0x2F0D, Mapped, "\u{5196}", Unspecified),
    (0x2F0E, 0x2F0E, Mapped, "\u{51AB}", Unspecified),
    (0x2F0F, 0x2F0F, Mapped, "\u{51E0}", Unspecified),
    (0x2F10, 0x2F10, Mapped, "\u{51F5}", Unspecified),
    (0x2F11, 0x2F11, Mapped, "\u{5200}", Unspecified),
    (0x2F12, 0x2F12, Mapped, "\u{529B}", Unspecified),
    (0x2F13, 0x2F13, Mapped, "\u{52F9}", Unspecified),
    (0x2F14, 0x2F14, Mapped, "\u{5315}", Unspecified),
    (0x2F15, 0x2F15, Mapped, "\u{531A}", Unspecified),
    (0x2F16, 0x2F16, Mapped, "\u{5338}", Unspecified),
    (0x2F17, 0x2F17, Mapped, "\u{5341}", Unspecified),
    (0x2F18, 0x2F18, Mapped, "\u{535C}", Unspecified),
    (0x2F19, 0x2F19, Mapped, "\u{5369}", Unspecified),
    (0x2F1A, 0x2F1A, Mapped, "\u{5382}", Unspecified),
    (0x2F1B, 0x2F1B, Mapped, "\u{53B6}", Unspecified),
    (0x2F1C, 0x2F1C, Mapped, "\u{53C8}", Unspecified),
    (0x2F1D, 0x2F1D, Mapped, "\u{53E3}", Unspecified),
    (0x2F1E, 0x2F1E, Mapped, "\u{56D7}", Unspecified),
    (0x2F1F, 0x2F1F, Mapped, "\u{571F}", Unspecified),
    (0x2F20, 0x2F20, Mapped, "\u{58EB}", Unspecified),
    (0x2F21, 0x2F21, Mapped, "\u{5902}", Unspecified),
    (0x2F22, 0x2F22, Mapped, "\u{590A}", Unspecified),
    (0x2F23, 0x2F23, Mapped, "\u{5915}", Unspecified),
    (0x2F24, 0x2F24, Mapped, "\u{5927}", Unspecified),
    (0x2F25, 0x2F25, Mapped, "\u{5973}", Unspecified),
    (0x2F26, 0x2F26, Mapped, "\u{5B50}", Unspecified),
    (0x2F27, 0x2F27, Mapped, "\u{5B80}", Unspecified),
    (0x2F28, 0x2F28, Mapped, "\u{5BF8}", Unspecified),
    (0x2F29, 0x2F29, Mapped, "\u{5C0F}", Unspecified),
    (0x2F2A, 0x2F2A, Mapped, "\u{5C22}", Unspecified),
    (0x2F2B, 0x2F2B, Mapped, "\u{5C38}", Unspecified),
    (0x2F2C, 0x2F2C, Mapped, "\u{5C6E}", Unspecified),
    (0x2F2D, 0x2F2D, Mapped, "\u{5C71}", Unspecified),
    (0x2F2E, 0x2F2E, Mapped, "\u{5DDB}", Unspecified),
    (0x2F2F, 0x2F2F, Mapped, "\u{5DE5}", Unspecified),
    (0x2F30, 0x2F30, Mapped, "\u{5DF1}", Unspecified),
    (0x2F31, 0x2F31, Mapped, "\u{5DFE}", Unspecified),
    (0x2F32, 0x2F32, Mapped, "\u{5E72}", Unspecified),
    (0x2F33, 0x2F33, Mapped, "\u{5E7A}", Unspecified),
    (0x2F34, 0x2F34, Mapped, "\u{5E7F}", Unspecified),
    (0x2F35, 0x2F35, Mapped, "\u{5EF4}", Unspecified),
    (0x2F36, 0x2F36, Mapped, "\u{5EFE}", Unspecified),
    (0x2F37, 0x2F37, Mapped, "\u{5F0B}", Unspecified),
    (0x2F38, 0x2F38, Mapped, "\u{5F13}", Unspecified),
    (0x2F39, 0x2F39, Mapped, "\u{5F50}", Unspecified),
    (0x2F3A, 0x2F3A, Mapped, "\u{5F61}", Unspecified),
    (0x2F3B, 0x2F3B, Mapped, "\u{5F73}", Unspecified),
    (0x2F3C, 0x2F3C, Mapped, "\u{5FC3}", Unspecified),
    (0x2F3D, 0x2F3D, Mapped, "\u{6208}", Unspecified),
    (0x2F3E, 0x2F3E, Mapped, "\u{6236}", Unspecified),
    (0x2F3F, 0x2F3F, Mapped, "\u{624B}", Unspecified),
    (0x2F40, 0x2F40, Mapped, "\u{652F}", Unspecified),
    (0x2F41, 0x2F41, Mapped, "\u{6534}", Unspecified),
    (0x2F42, 0x2F42, Mapped, "\u{6587}", Unspecified),
    (0x2F43, 0x2F43, Mapped, "\u{6597}", Unspecified),
    (0x2F44, 0x2F44, Mapped, "\u{65A4}", Unspecified),
    (0x2F45, 0x2F45, Mapped, "\u{65B9}", Unspecified),
    (0x2F46, 0x2F46, Mapped, "\u{65E0}", Unspecified),
    (0x2F47, 0x2F47, Mapped, "\u{65E5}", Unspecified),
    (0x2F48, 0x2F48, Mapped, "\u{66F0}", Unspecified),
    (0x2F49, 0x2F49, Mapped, "\u{6708}", Unspecified),
    (0x2F4A, 0x2F4A, Mapped, "\u{6728}", Unspecified),
    (0x2F4B, 0x2F4B, Mapped, "\u{6B20}", Unspecified),
    (0x2F4C, 0x2F4C, Mapped, "\u{6B62}", Unspecified),
    (0x2F4D, 0x2F4D, Mapped, "\u{6B79}", Unspecified),
    (0x2F4E, 0x2F4E, Mapped, "\u{6BB3}", Unspecified),
    (0x2F4F, 0x2F4F, Mapped, "\u{6BCB}", Unspecified),
    (0x2F50, 0x2F50, Mapped, "\u{6BD4}", Unspecified),
    (0x2F51, 0x2F51, Mapped, "\u{6BDB}", Unspecified),
    (0x2F52, 0x2F52, Mapped, "\u{6C0F}", Unspecified),
    (0x2F53, 0x2F53, Mapped, "\u{6C14}", Unspecified),
    (0x2F54, 0x2F54, Mapped, "\u{6C34}", Unspecified),
    (0x2F55, 0x2F55, Mapped, "\u{706B}", Unspecified),
    (0x2F56, 0x2F56, Mapped, "\u{722A}", Unspecified),
    (0x2F57, 0x2F57, Mapped, "\u{7236}", Unspecified),
    (0x2F58, 0x2F58, Mapped, "\u{723B}", Unspecified),
    (0x2F59, 0x2F59, Mapped, "\u{723F}", Unspecified),
    (0x2F5A, 0x2F5A, Mapped, "\u{7247}", Unspecified),
    (0x2F5B, 0x2F5B, Mapped, "\u{7259}", Unspecified),
    (0x2F5C, 0x2F5C, Mapped, "\u{725B}", Unspecified),
    (0x2F5D, 0x2F5D, Mapped, "\u{72AC}", Unspecified),
    (0x2F5E, 0x2F5E, Mapped, "\u{7384}", Unspecified),
    (0x2F5F, 0x2F5F, Mapped, "\u{7389}", Unspecified),
    (0x2F60, 0x2F60, Mapped, "\u{74DC}", Unspecified),
    (0x2F61, 0x2F61, Mapped, "\u{74E6}", Unspecified),
    (0x2F62, 0x2F62, Mapped, "\u{7518}", Unspecified),
    (0x2F63, 0x2F63, Mapped, "\u{751F}", Unspecified),
    (0x2F64, 0x2F64, Mapped, "\u{7528}", Unspecified),
    (0x2F65, 0x2F65, Mapped, "\u{7530}", Unspecified),
    (0x2F66, 0x2F66, Mapped, "\u{758B}", Unspecified),
    (0x2F67, 0x2F67, Mapped, "\u{7592}", Unspecified),
    (0x2F68, 0x2F68, Mapped, "\u{7676}", Unspecified),
    (0x2F69, 0x2F69, Mapped, "\u{767D}", Unspecified),
    (0x2F6A, 0x2F6A, Mapped, "\u{76AE}", Unspecified),
    (0x2F6B, 0x2F6B, Mapped, "\u{76BF}", Unspecified),
    (0x2F6C, 0x2F6C, Mapped, "\u{76EE}", Unspecified),
    (0x2F6D, 0x2F6D, Mapped, "\u{77DB}", Unspecified),
    (0x2F6E, 0x2F6E, Mapped, "\u{77E2}", Unspecified),
    (0x2F6F, 0x2F6F, Mapped, "\u{77F3}", Unspecified),
    (0x2F70, 0x2F70, Mapped, "\u{793A}", Unspecified),
    (0x2F71, 0x2F71, Mapped, "\u{79B8}", Unspecified),
    (0x2F72, 0x2F72, Mapped, "\u{79BE}", Unspecified),
    (0x2F73, 0x2F73, Mapped, "\u{7A74}", Unspecified),
    (0x2F74, 0x2F74, Mapped, "\u{7ACB}", Unspecified),
    (0x2F75, 0x2F75, Mapped, "\u{7AF9}", Unspecified),
    (0x2F76, 0x2F76, Mapped, "\u{7C73}", Unspecified),
    (0x2F77, 0x2F77, Mapped, "\u{7CF8}", Unspecified),
    (0x2F78, 0x2F78, Mapped, "\u{7F36}", Unspecified),
    (0x2F79, 0x2F79, Mapped, "\u{7F51}", Unspecified),
    (0x2F7A, 0x2F7A, Mapped, "\u{7F8A}", Unspecified),
    (0x2F7B, 0x2F7B, Mapped, "\u{7FBD}", Unspecified),
    (0x2F7C, 0x2F7C, Mapped, "\u{8001}", Unspecified),
    (0x2F7D, 0x2F7D, Mapped, "\u{800C}", Unspecified),
    (0x2F7E, 0x2F7E, Mapped, "\u{8012}", Unspecified),
    (0x2F7F, 0x2F7F, Mapped, "\u{8033}", Unspecified),
    (0x2F80, 0x2F80, Mapped, "\u{807F}", Unspecified),
    (0x2F81, 0x2F81, Mapped, "\u{8089}", Unspecified),
    (0x2F82, 0x2F82, Mapped, "\u{81E3}", Unspecified),
    (0x2F83, 0x2F83, Mapped, "\u{81EA}", Unspecified),
    (0x2F84, 0x2F84, Mapped, "\u{81F3}", Unspecified),
    (0x2F85, 0x2F85, Mapped, "\u{81FC}", Unspecified),
    (0x2F86, 0x2F86, Mapped, "\u{820C}", Unspecified),
    (0x2F87, 0x2F87, Mapped, "\u{821B}", Unspecified),
    (0x2F88, 0x2F88, Mapped, "\u{821F}", Unspecified),
    (0x2F89, 0x2F89, Mapped, "\u{826E}", Unspecified),
    (0x2F8A, 0x2F8A, Mapped, "\u{8272}", Unspecified),
    (0x2F8B, 0x2F8B, Mapped, "\u{8278}", Unspecified),
    (0x2F8C, 0x2F8C, Mapped, "\u{864D}", Unspecified),
    (0x2F8D, 0x2F8D, Mapped, "\u{866B}", Unspecified),
    (0x2F8E, 0x2F8E, Mapped, "\u{8840}", Unspecified),
    (0x2F8F, 0x2F8F, Mapped, "\u{884C}", Unspecified),
    (0x2F90, 0x2F90, Mapped, "\u{8863}", Unspecified),
    (0x2F91, 0x2F91, Mapped, "\u{897E}", Unspecified),
    (0x2F92, 0x2F92, Mapped, "\u{898B}", Unspecified),
    (0x2F93, 0x2F93, Mapped, "\u{89D2}", Unspecified),
    (0x2F94, 0x2F94, Mapped, "\u{8A00}", Unspecified),
    (0x2F95, 0x2F95, Mapped, "\u{8C37}", Unspecified),
    (0x2F96, 0x2F96, Mapped, "\u{8C46}", Unspecified),
    (0x2F97, 0x2F97, Mapped, "\u{8C55}", Unspecified),
    (0x2F98, 0x2F98, Mapped, "\u{8C78}", Unspecified),
    (0x2F99, 0x2F99, Mapped, "\u{8C9D}", Unspecified),
    (0x2F9A, 0x2F9A, Mapped, "\u{8D64}", Unspecified),
    (0x2F9B, 0x2F9B, Mapped, "\u{8D70}", Unspecified),
    (0x2F9C, 0x2F9C, Mapped, "\u{8DB3}", Unspecified),
    (0x2F9D, 0x2F9D, Mapped, "\u{8EAB}", Unspecified),
    (0x2F9E, 0x2F9E, Mapped, "\u{8ECA}", Unspecified),
    (0x2F9F, 0x2F9F, Mapped, "\u{8F9B}", Unspecified),
    (0x2FA0, 0x2FA0, Mapped, "\u{8FB0}", Unspecified),
    (0x2FA1, 0x2FA1, Mapped, "\u{8FB5}", Unspecified),
    (0x2FA2, 0x2FA2, Mapped, "\u{9091}", Unspecified),
    (0x2FA3, 0x2FA3, Mapped, "\u{9149}", Unspecified),
    (0x2FA4, 0x2FA4, Mapped, "\u{91C6}", Unspecified),
    (0x2FA5, 0x2FA5, Mapped, "\u{91CC}", Unspecified),
    (0x2FA6, 0x2FA6, Mapped, "\u{91D1}", Unspecified),
    (0x2FA7, 0x2FA7, Mapped, "\u{9577}", Unspecified),
    (0x2FA8, 0x2FA8, Mapped, "\u{9580}", Unspecified),
    (0x2FA9, 0x2FA9, Mapped, "\u{961C}", Unspecified),
    (0x2FAA, 0x2FAA, Mapped, "\u{96B6}", Unspecified),
    (0x2FAB, 0x2FAB, Mapped, "\u{96B9}", Unspecified),
    (0x2FAC, 0x2FAC, Mapped, "\u{96E8}", Unspecified),
    (0x2FAD, 0x2FAD, Mapped, "\u{9751}", Unspecified),
    (0x2FAE, 0x2FAE, Mapped, "\u{975E}", Unspecified),
    (0x2FAF, 0x2FAF, Mapped, "\u{9762}", Unspecified),
    (0x2FB0, 0x2FB0, Mapped, "\u{9769}", Unspecified),
    (0x2FB1, 0x2FB1, Mapped, "\u{97CB}", Unspecified),
    (0x2FB2, 0x2FB2, Mapped, "\u{97ED}", Unspecified),
    (0x2FB3, 0x2FB3, Mapped, "\u{97F3}", Unspecified),
    (0x2FB4, 0x2FB4, Mapped, "\u{9801}", Unspecified),
    (0x2FB5, 0x2FB5, Mapped, "\u{98A8}", Unspecified),
    (0x2FB6, 0x2FB6, Mapped, "\u{98DB}", Unspecified),
    (0x2FB7, 0x2FB7, Mapped, "\u{98DF}", Unspecified),
    (0x2FB8, 0x2FB8, Mapped, "\u{9996}", Unspecified),
    (0x2FB9, 0x2FB9, Mapped, "\u{9999}", Unspecified),
    (0x2FBA, 0x2FBA, Mapped, "\u{99AC}", Unspecified),
    (0x2FBB, 0x2FBB, Mapped, "\u{9AA8}", Unspecified),
    (0x2FBC, 0x2FBC, Mapped, "\u{9AD8}", Unspecified),
    (0x2FBD, 0x2FBD, Mapped, "\u{9ADF}", Unspecified),
    (0x2FBE, 0x2FBE, Mapped, "\u{9B25}", Unspecified),
    (0x2FBF, 0x2FBF, Mapped, "\u{9B2F}", Unspecified),
    (0x2FC0, 0x2FC0, Mapped, "\u{9B32}", Unspecified),
    (0x2FC1, 0x2FC1, Mapped, "\u{9B3C}", Unspecified),
    (0x2FC2, 0x2FC2, Mapped, "\u{9B5A}", Unspecified),
    (0x2FC3, 0x2FC3, Mapped, "\u{9CE5}", Unspecified),
    (0x2FC4, 0x2FC4, Mapped, "\u{9E75}", Unspecified),
    (0x2FC5, 0x2FC5, Mapped, "\u{9E7F}", Unspecified),
    (0x2FC6, 0x2FC6, Mapped, "\u{9EA5}", Unspecified),
    (0x2FC7, 0x2FC7, Mapped, "\u{9EBB}", Unspecified),
    (0x2FC8, 0x2FC8, Mapped, "\u{9EC3}", Unspecified),
    (0x2FC9, 0x2FC9, Mapped, "\u{9ECD}", Unspecified),
    (0x2FCA, 0x2FCA, Mapped, "\u{9ED1}", Unspecified),
    (0x2FCB, 0x2FCB, Mapped, "\u{9EF9}", Unspecified),
    (0x2FCC, 0x2FCC, Mapped, "\u{9EFD}", Unspecified),
    (0x2FCD, 0x2FCD, Mapped, "\u{9F0E}", Unspecified),
    (0x2FCE, 0x2FCE, Mapped, "\u{9F13}", Unspecified),
    (0x2FCF, 0x2FCF, Mapped, "\u{9F20}", Unspecified),
    (0x2FD0, 0x2FD0, Mapped, "\u{9F3B}", Unspecified),
    (0x2FD1, 0x2FD1, Mapped, "\u{9F4A}", Unspecified),
    (0x2FD2, 0x2FD2, Mapped, "\u{9F52}", Unspecified),
    (0x2FD3, 0x2FD3, Mapped, "\u{9F8D}", Unspecified),
    (0x2FD4, 0x2FD4, Mapped, "\u{9F9C}", Unspecified),
    (0x2FD5, 0x2FD5, Mapped, "\u{9FA0}", Unspecified),
    (0x2FD6, 0x2FFF, Disallowed, "", Unspecified),
    (0x3000, 0x3000, DisallowedStd3Mapped, " ", Unspecified),
    (0x3001, 0x3001, Valid, "", Nv8),
    (0x3002, 0x3002, Mapped, ".", Unspecified),
    (0x3003, 0x3004, Valid, "", Nv8),
    (0x3005, 0x3007, Valid, "", Unspecified),
    (0x3008, 0x3029, Valid, "", Nv8),
    (0x302A, 0x302D, Valid, "", Unspecified),
    (0x302E, 0x3035, Valid, "", Nv8),
    (0x3036, 0x3036, Mapped, "\u{3012}", Unspecified),
    (0x3037, 0x3037, Valid, "", Nv8),
    (0x3038, 0x3038, Mapped, "\u{5341}", Unspecified),
    (0x3039, 0x3039, Mapped, "\u{5344}", Unspecified),
    (0x303A, 0x303A, Mapped, "\u{5345}", Unspecified),
    (0x303B, 0x303B, Valid, "", Nv8),
    (0x303C, 0x303C, Valid, "", Unspecified),
    (0x303D, 0x303F, Valid, "", Nv8),
    (0x3040, 0x3040, Disallowed, "", Unspecified),
    (0x3041, 0x3096, Valid, "", Unspecified),
    (0x3097, 0x3098, Disallowed, "", Unspecified),
    (0x3099, 0x309A, Valid, "", Unspecified),
    (0x309B, 0x309B, DisallowedStd3Mapped, " \u{3099}", Unspecified),
    (0x309C, 0x309C, DisallowedStd3Mapped, " \u{309A}", Unspecified),
    (0x309D, 0x309E, Valid, "", Unspecified),
    (0x309F, 0x309F, Mapped, "\u{3088}\u{308A}", Unspecified),
    (0x30A0, 0x30A0, Valid, "", Nv8),
    (0x30A1, 0x30FE, Valid, "", Unspecified),
    (0x30FF, 0x30FF, Mapped, "\u{30B3}\u{30C8}", Unspecified),
    (0x3100, 0x3104, Disallowed, "", Unspecified),
    (0x3105, 0x312F, Valid, "", Unspecified),
    (0x3130, 0x3130, Disallowed, "", Unspecified),
    (0x3131, 0x3131, Mapped, "\u{1100}", Unspecified),
    (0x3132, 0x3132, Mapped, "\u{1101}", Unspecified),
    (0x3133, 0x3133, Mapped, "\u{11AA}", Unspecified),
    (0x3134, 0x3134, Mapped, "\u{1102}", Unspecified),
    (0x3135, 0x3135, Mapped, "\u{11AC}", Unspecified),
    (0x3136, 0x3136, Mapped, "\u{11AD}", Unspecified),
    (0x3137, 0x3137, Mapped, "\u{1103}", Unspecified),
    (0x3138, 0x3138, Mapped, "\u{1104}", Unspecified),
    (0x3139, 0x3139, Mapped, "\u{1105}", Unspecified),
    (0x313A, 0x313A, Mapped, "\u{11B0}", Unspecified),
    (0x313B, 0x313B, Mapped, "\u{11B1}", Unspecified),
    (0x313C, 0x313C, Mapped, "\u{11B2}", Unspecified),
    (0x313D, 0x313D, Mapped, "\u{11B3}", Unspecified),
    (0x313E, 0x313E, Mapped, "\u{11B4}", Unspecified),
    (0x313F, 0x313F, Mapped, "\u{11B5}", Unspecified),
    (0x3140, 0x3140, Mapped, "\u{111A}", Unspecified),
    (0x3141, 0x3141, Mapped, "\u{1106}", Unspecified),
    (0x3142, 0x3142, Mapped, "\u{1107}", Unspecified),
    (0x3143, 0x3143, Mapped, "\u{1108}", Unspecified),
    (0x3144, 0x3144, Mapped, "\u{1121}", Unspecified),
    (0x3145, 0x3145, Mapped, "\u{1109}", Unspecified),
    (0x3146, 0x3146, Mapped, "\u{110A}", Unspecified),
    (0x3147, 0x3147, Mapped, "\u{110B}", Unspecified),
    (0x3148, 0x3148, Mapped, "\u{110C}", Unspecified),
    (0x3149, 0x3149, Mapped, "\u{110D}", Unspecified),
    (0x314A, 0x314A, Mapped, "\u{110E}", Unspecified),
    (0x314B, 0x314B, Mapped, "\u{110F}", Unspecified),
    (0x314C, 0x314C, Mapped, "\u{1110}", Unspecified),
    (0x314D, 0x314D, Mapped, "\u{1111}", Unspecified),
    (0x314E, 0x314E, Mapped, "\u{1112}", Unspecified),
    (0x314F, 0x314F, Mapped, "\u{1161}", Unspecified),
    (0x3150, 0x3150, Mapped, "\u{1162}", Unspecified),
    (0x3151, 0x3151, Mapped, "\u{1163}", Unspecified),
    (0x3152, 0x3152, Mapped, "\u{1164}", Unspecified),
    (0x3153, 0x3153, Mapped, "\u{1165}", Unspecified),
    (0x3154, 0x3154, Mapped, "\u{1166}", Unspecified),
    (0x3155, 0x3155, Mapped, "\u{1167}", Unspecified),
    (0x3156, 0x3156, Mapped, "\u{1168}", Unspecified),
    (0x3157, 0x3157, Mapped, "\u{1169}", Unspecified),
    (0x3158, 0x3158, Mapped, "\u{116A}", Unspecified),
    (0x3159, 0x3159, Mapped, "\u{116B}", Unspecified),
    (0x315A, 0x315A, Mapped, "\u{116C}", Unspecified),
    (0x315B, 0x315B, Mapped, "\u{116D}", Unspecified),
    (0x315C, 0x315C, Mapped, "\u{116E}", Unspecified),
    (0x315D, 0x315D, Mapped, "\u{116F}", Unspecified),
    (0x315E, 0x315E, Mapped, "\u{1170}", Unspecified),
    (0x315F, 0x315F, Mapped, "\u{1171}", Unspecified),
    (0x3160, 0x3160, Mapped, "\u{1172}", Unspecified),
    (0x3161, 0x3161, Mapped, "\u{1173}", Unspecified),
    (0x3162, 0x3162, Mapped, "\u{1174}", Unspecified),
    (0x3163, 0x3163, Mapped, "\u{1175}", Unspecified),
    (0x3164, 0x3164, Disallowed, "", Unspecified),
    (0x3165, 0x3165, Mapped, "\u{1114}", Unspecified),
    (0x3166, 0x3166, Mapped, "\u{1115}", Unspecified),
    (0x3167, 0x3167, Mapped, "\u{11C7}", Unspecified),
    (0x3168, 0x3168, Mapped, "\u{11C8}", Unspecified),
    (0x3169, 0x3169, Mapped, "\u{11CC}", Unspecified),
    (0x316A, 0x316A, Mapped, "\u{11CE}", Unspecified),
    (0x316B, 0x316B, Mapped, "\u{11D3}", Unspecified),
    (0x316C, 0x316C, Mapped, "\u{11D7}", Unspecified),
    (0x316D, 0x316D, Mapped, "\u{11D9}", Unspecified),
    (0x316E, 0x316E, Mapped, "\u{111C}", Unspecified),
    (0x316F, 0x316F, Mapped, "\u{11DD}", Unspecified),
    (0x3170, 0x3170, Mapped, "\u{11DF}", Unspecified),
    (0x3171, 0x3171, Mapped, "\u{111D}", Unspecified),
    (0x3172, 0x3172, Mapped, "\u{111E}", Unspecified),
    (0x3173, 0x3173, Mapped, "\u{1120}", Unspecified),
    (0x3174, 0x3174, Mapped, "\u{1122}", Unspecified),
    (0x3175, 0x3175, Mapped, "\u{1123}", Unspecified),
    (0x3176, 0x3176, Mapped, "\u{1127}", Unspecified),
    (0x3177, 0x3177, Mapped, "\u{1129}", Unspecified),
    (0x3178, 0x3178, Mapped, "\u{112B}", Unspecified),
    (0x3179, 0x3179, Mapped, "\u{112C}", Unspecified),
    (0x317A, 0x317A, Mapped, "\u{112D}", Unspecified),
    (0x317B, 0x317B, Mapped, "\u{112E}", Unspecified),
    (0x317C, 0x317C, Mapped, "\u{112F}", Unspecified),
    (0x317D, 0x317D, Mapped, "\u{1132}", Unspecified),
    (0x317E, 0x317E, Mapped, "\u{1136}", Unspecified),
    (0x317F, 0x317F, Mapped, "\u{1140}", Unspecified),
    (0x3180, 0x3180, Mapped, "\u{1147}", Unspecified),
    (0x3181, 0x3181, Mapped, "\u{114C}", Unspecified),
    (0x3182, 0x3182, Mapped, "\u{11F1}", Unspecified),
    (0x3183, 0x3183, Mapped, "\u{11F2}", Unspecified),
    (0x3184, 0x3184, Mapped, "\u{1157}", Unspecified),
    (0x3185, 0x3185, Mapped, "\u{1158}", Unspecified),
    (0x3186, 0x3186, Mapped, "\u{1159}", Unspecified),
    (0x3187, 0x3187, Mapped, "\u{1184}", Unspecified),
    (0x3188, 0x3188, Mapped, "\u{1185}", Unspecified),
    (0x3189, 0x3189, Mapped, "\u{1188}", Unspecified),
    (0x318A, 0x318A, Mapped, "\u{1191}", Unspecified),
    (0x318B, 0x318B, Mapped, "\u{1192}", Unspecified),
    (0x318C, 0x318C, Mapped, "\u{1194}", Unspecified),
    (0x318D, 0x318D, Mapped, "\u{119E}", Unspecified),
    (0x318E, 0x318E, Mapped, "\u{11A1}", Unspecified),
    (0x318F, 0x318F, Disallowed, "", Unspecified),
    (0x3190, 0x3191, Valid, "", Nv8),
    (0x3192, 0x3192, Mapped, "\u{4E00}", Unspecified),
    (0x3193, 0x3193, Mapped, "\u{4E8C}", Unspecified),
    (0x3194, 0x3194, Mapped, "\u{4E09}", Unspecified),
    (0x3195, 0x3195, Mapped, "\u{56DB}", Unspecified),
    (0x3196, 0x3196, Mapped, "\u{4E0A}", Unspecified),
    (0x3197, 0x3197, Mapped, "\u{4E2D}", Unspecified),
    (0x3198, 0x3198, Mapped, "\u{4E0B}", Unspecified),
    (0x3199, 0x3199, Mapped, "\u{7532}", Unspecified),
    (0x319A, 0x319A, Mapped, "\u{4E59}", Unspecified),
    (0x319B, 0x319B, Mapped, "\u{4E19}", Unspecified),
    (0x319C, 0x319C, Mapped, "\u{4E01}", Unspecified),
    (0x319D, 0x319D, Mapped, "\u{5929}", Unspecified),
    (0x319E, 0x319E, Mapped, "\u{5730}", Unspecified),
    (0x319F, 0x319F, Mapped, "\u{4EBA}", Unspecified),
    (0x31A0, 0x31BF, Valid, "", Unspecified),
    (0x31C0, 0x31E3, Valid, "", Nv8),
    (0x31E4, 0x31EF, Disallowed, "", Unspecified),
    (0x31F0, 0x31FF, Valid, "", Unspecified),
    (0x3200, 0x3200, DisallowedStd3Mapped, "(\u{1100})", Unspecified),
    (0x3201, 0x3201, DisallowedStd3Mapped, "(\u{1102})", Unspecified),
    (0x3202, 0x3202, DisallowedStd3Mapped, "(\u{1103})", Unspecified),
    (0x3203, 0x3203, DisallowedStd3Mapped, "(\u{1105})", Unspecified),
    (0x3204, 0x3204, DisallowedStd3Mapped, "(\u{1106})", Unspecified),
    (0x3205, 0x3205, DisallowedStd3Mapped, "(\u{1107})", Unspecified),
    (0x3206, 0x3206, DisallowedStd3Mapped, "(\u{1109})", Unspecified),
    (0x3207, 0x3207, DisallowedStd3Mapped, "(\u{110B})", Unspecified),
    (0x3208, 0x3208, DisallowedStd3Mapped, "(\u{110C})", Unspecified),
    (0x3209, 0x3209, DisallowedStd3Mapped, "(\u{110E})", Unspecified),
    (0x320A, 0x320A, DisallowedStd3Mapped, "(\u{110F})", Unspecified),
    (0x320B, 0x320B, DisallowedStd3Mapped, "(\u{1110})", Unspecified),
    (0x320C, 0x320C, DisallowedStd3Mapped, "(\u{1111})", Unspecified),
    (0x320D, 0x320D, DisallowedStd3Mapped, "(\u{1112})", Unspecified),
    (0x320E, 0x320E, DisallowedStd3Mapped, "(\u{AC00})", Unspecified),
    (0x320F, 0x320F, DisallowedStd3Mapped, "(\u{B098})", Unspecified),
    (0x3210, 0x3210, DisallowedStd3Mapped, "(\u{B2E4})", Unspecified),
    (0x3211, 0x3211, DisallowedStd3Mapped, "(\u{B77C})", Unspecified),
    (0x3212, 0x3212, DisallowedStd3Mapped, "(\u{B9C8})", Unspecified),
    (0x3213, 0x3213, DisallowedStd3Mapped, "(\u{BC14})", Unspecified),
    (0x3214, 0x3214, DisallowedStd3Mapped, "(\u{C0AC})", Unspecified),
    (0x3215, 0x3215, DisallowedStd3Mapped, "(\u{C544})", Unspecified),
    (0x3216, 0x3216, DisallowedStd3Mapped, "(\u{C790})", Unspecified),
    (0x3217, 0x3217, DisallowedStd3Mapped, "(\u{CC28})", Unspecified),
    (0x3218, 0x3218, DisallowedStd3Mapped, "(\u{CE74})", Unspecified),
    (0x3219, 0x3219, DisallowedStd3Mapped, "(\u{D0C0})", Unspecified),
    (0x321A, 0x321A, DisallowedStd3Mapped, "(\u{D30C})", Unspecified),
    (0x321B, 0x321B, DisallowedStd3Mapped, "(\u{D558})", Unspecified),
    (0x321C, 0x321C, DisallowedStd3Mapped, "(\u{C8FC})", Unspecified),
    (0x321D, 0x321D, DisallowedStd3Mapped, "(\u{C624}\u{C804})", Unspecified),
    (0x321E, 0x321E, DisallowedStd3Mapped, "(\u{C624}\u{D6C4})", Unspecified),
    (0x321F, 0x321F, Disallowed, "", Unspecified),
    (0x3220, 0x3220, DisallowedStd3Mapped, "(\u{4E00})", Unspecified),
    (0x3221, 0x3221, DisallowedStd3Mapped, "(\u{4E8C})", Unspecified),
    (0x3222, 0x3222, DisallowedStd3Mapped, "(\u{4E09})", Unspecified),
    (0x3223, 0x3223, DisallowedStd3Mapped, "(\u{56DB})", Unspecified),
    (0x3224, 0x3224, DisallowedStd3Mapped, "(\u{4E94})", Unspecified),
    (0x3225, 0x3225, DisallowedStd3Mapped, "(\u{516D})", Unspecified),
    (0x3226, 0x3226, DisallowedStd3Mapped, "(\u{4E03})", Unspecified),
    (0x3227, 0x3227, DisallowedStd3Mapped, "(\u{516B})", Unspecified),
    (0x3228, 0x3228, DisallowedStd3Mapped, "(\u{4E5D})", Unspecified),
    (0x3229, 0x3229, DisallowedStd3Mapped, "(\u{5341})", Unspecified),
    (0x322A, 0x322A, DisallowedStd3Mapped, "(\u{6708})", Unspecified),
    (0x322B, 0x322B, DisallowedStd3Mapped, "(\u{706B})", Unspecified),
    (0x322C, 0x322C, DisallowedStd3Mapped, "(\u{6C34})", Unspecified),
    (0x322D, 0x322D, DisallowedStd3Mapped, "(\u{6728})", Unspecified),
    (0x322E, 0x322E, DisallowedStd3Mapped, "(\u{91D1})", Unspecified),
    (0x322F, 0x322F, DisallowedStd3Mapped, "(\u{571F})", Unspecified),
    (0x3230, 0x3230, DisallowedStd3Mapped, "(\u{65E5})", Unspecified),
    (0x3231, 0x3231, DisallowedStd3Mapped, "(\u{682A})", Unspecified),
    (0x3232, 0x3232, DisallowedStd3Mapped, "(\u{6709})", Unspecified),
    (0x3233, 0x3233, DisallowedStd3Mapped, "(\u{793E})", Unspecified),
    (0x3234, 0x3234, DisallowedStd3Mapped, "(\u{540D})", Unspecified),
    (0x3235, 0x3235, DisallowedStd3Mapped, "(\u{7279})", Unspecified),
    (0x3236, 0x3236, DisallowedStd3Mapped, "(\u{8CA1})", Unspecified),
    (0x3237, 0x3237, DisallowedStd3Mapped, "(\u{795D})", Unspecified),
    (0x3238, 0x3238, DisallowedStd3Mapped, "(\u{52B4})", Unspecified),
    (0x3239, 0x3239, DisallowedStd3Mapped, "(\u{4EE3})", Unspecified),
    (0x323A, 0x323A, DisallowedStd3Mapped, "(\u{547C})", Unspecified),
    (0x323B, 0x323B, DisallowedStd3Mapped, "(\u{5B66})", Unspecified),
    (0x323C, 0x323C, DisallowedStd3Mapped, "(\u{76E3})", Unspecified),
    (0x323D, 0x323D, DisallowedStd3Mapped, "(\u{4F01})", Unspecified),
    (0x323E, 0x323E, DisallowedStd3Mapped, "(\u{8CC7})", Unspecified),
    (0x323F, 0x323F, DisallowedStd3Mapped, "(\u{5354})", Unspecified),
    (0x3240, 0x3240, DisallowedStd3Mapped, "(\u{796D})", Unspecified),
    (0x3241, 0x3241, DisallowedStd3Mapped, "(\u{4F11})", Unspecified),
    (0x3242, 0x3242, DisallowedStd3Mapped, "(\u{81EA})", Unspecified),
    (0x3243, 0x3243, DisallowedStd3Mapped, "(\u{81F3})", Unspecified),
    (0x3244, 0x3244, Mapped, "\u{554F}", Unspecified),
    (0x3245, 0x3245, Mapped, "\u{5E7C}", Unspecified),
    (0x3246, 0x3246, Mapped, "\u{6587}", Unspecified),
    (0x3247, 0x3247, Mapped, "\u{7B8F}", Unspecified),
    (0x3248, 0x324F, Valid, "", Nv8),
    (0x3250, 0x3250, Mapped, "pte", Unspecified),
    (0x3251, 0x3251, Mapped, "21", Unspecified),
    (0x3252, 0x3252, Mapped, "22", Unspecified),
    (0x3253, 0x3253, Mapped, "23", Unspecified),
    (0x3254, 0x3254, Mapped, "24", Unspecified),
    (0x3255, 0x3255, Mapped, "25", Unspecified),
    (0x3256, 0x3256, Mapped, "26", Unspecified),
    (0x3257, 0x3257, Mapped, "27", Unspecified),
    (0x3258, 0x3258, Mapped, "28", Unspecified),
    (0x3259, 0x3259, Mapped, "29", Unspecified),
    (0x325A, 0x325A, Mapped, "30", Unspecified),
    (0x325B, 0x325B, Mapped, "31", Unspecified),
    (0x325C, 0x325C, Mapped, "32", Unspecified),
    (0x325D, 0x325D, Mapped, "33", Unspecified),
    (0x325E, 0x325E, Mapped, "34", Unspecified),
    (0x325F, 0x325F, Mapped, "35", Unspecified),
    (0x3260, 0x3260, Mapped, "\u{1100}", Unspecified),
    (0x3261, 0x3261, Mapped, "\u{1102}", Unspecified),
    (0x3262, 0x3262, Mapped, "\u{1103}", Unspecified),
    (0x3263, 0x3263, Mapped, "\u{1105}", Unspecified),
    (0x3264, 0x3264, Mapped, "\u{1106}", Unspecified),
    (0x3265, 0x3265, Mapped, "\u{1107}", Unspecified),
    (0x3266, 0x3266, Mapped, "\u{1109}", Unspecified),
    (0x3267, 0x3267, Mapped, "\u{110B}", Unspecified),
    (0x3268, 0x3268, Mapped, "\u{110C}", Unspecified),
    (0x3269, 0x3269, Mapped, "\u{110E}", Unspecified),
    (0x326A, 0x326A, Mapped, "\u{110F}", Unspecified),
    (0x326B, 0x326B, Mapped, "\u{1110}", Unspecified),
    (0x326C, 0x326C, Mapped, "\u{1111}", Unspecified),
    (0x326D, 0x326D, Mapped, "\u{1112}", Unspecified),
    (0x326E, 0x326E, Mapped, "\u{AC00}", Unspecified),
    (0x326F, 0x326F, Mapped, "\u{B098}", Unspecified),
    (0x3270, 0x3270, Mapped, "\u{B2E4}", Unspecified),
    (0x3271, 0x3271, Mapped, "\u{B77C}", Unspecified),
    (0x3272, 0x3272, Mapped, "\u{B9C8}", Unspecified),
    (0x3273, 0x3273, Mapped, "\u{BC14}", Unspecified),
    (0x3274, 0x3274, Mapped, "\u{C0AC}", Unspecified),
    (0x3275, 0x3275, Mapped, "\u{C544}", Unspecified),
    (0x3276, 0x3276, Mapped, "\u{C790}", Unspecified),
    (0x3277, 0x3277, Mapped, "\u{CC28}", Unspecified),
    (0x3278, 0x3278, Mapped, "\u{CE74}", Unspecified),
    (0x3279, 0x3279, Mapped, "\u{D0C0}", Unspecified),
    (0x327A, 0x327A, Mapped, "\u{D30C}", Unspecified),
    (0x327B, 0x327B, Mapped, "\u{D558}", Unspecified),
    (0x327C, 0x327C, Mapped, "\u{CC38}\u{ACE0}", Unspecified),
    (0x327D, 0x327D, Mapped, "\u{C8FC}\u{C758}", Unspecified),
    (0x327E, 0x327E, Mapped, "\u{C6B0}", Unspecified),
    (0x327F, 0x327F, Valid, "", Nv8),
    (0x3280, 0x3280, Mapped, "\u{4E00}", Unspecified),
    (0x3281, 0x3281, Mapped, "\u{4E8C}", Unspecified),
    (0x3282, 0x3282, Mapped, "\u{4E09}", Unspecified),
    (0x3283, 0x3283, Mapped, "\u{56DB}", Unspecified),
    (0x3284, 0x3284, Mapped, "\u{4E94}", Unspecified),
    (0x3285, 0x3285, Mapped, "\u{516D}", Unspecified),
    (0x3286, 0x3286, Mapped, "\u{4E03}", Unspecified),
    (0x3287, 0x3287, Mapped, "\u{516B}", Unspecified),
    (0x3288, 0x3288, Mapped, "\u{4E5D}", Unspecified),
    (0x3289, 0x3289, Mapped, "\u{5341}", Unspecified),
    (0x328A, 0x328A, Mapped, "\u{6708}", Unspecified),
    (0x328B, 0x328B, Mapped, "\u{706B}", Unspecified),
    (0x328C, 0x328C, Mapped, "\u{6C34}", Unspecified),
    (0x328D, 0x328D, Mapped, "\u{6728}", Unspecified),
    (0x328E, 0x328E, Mapped, "\u{91D1}", Unspecified),
    (0x328F, 0x328F, Mapped, "\u{571F}", Unspecified),
    (0x3290, 0x3290, Mapped, "\u{65E5}", Unspecified),
    (0x3291, 0x3291, Mapped, "\u{682A}", Unspecified),
    (0x3292, 0x3292, Mapped, "\u{6709}", Unspecified),
    (0x3293, 0x3293, Mapped, "\u{793E}", Unspecified),
    (0x3294, 0x3294, Mapped, "\u{540D}", Unspecified),
    (0x3295, 0x3295, Mapped, "\u{7279}", Unspecified),
    (0x3296, 0x3296, Mapped, "\u{8CA1}", Unspecified),
    (0x3297, 0x3297, Mapped, "\u{795D}", Unspecified),
    (0x3298, 0x3298, Mapped, "\u{52B4}", Unspecified),
    (0x3299, 0x3299, Mapped, "\u{79D8}", Unspecified),
    (0x329A, 0x329A, Mapped, "\u{7537}", Unspecified),
    (0x329B, 0x329B, Mapped, "\u{5973}", Unspecified),
    (0x329C, 0x329C, Mapped, "\u{9069}", Unspecified),
    (0x329D, 0x329D, Mapped, "\u{512A}", Unspecified),
    (0x329E, 0x329E, Mapped, "\u{5370}", Unspecified),
    (0x329F, 0x329F, Mapped, "\u{6CE8}", Unspecified),
    (0x32A0, 0x32A0, Mapped, "\u{9805}", Unspecified),
    (0x32A1, 0x32A1, Mapped, "\u{4F11}", Unspecified),
    (0x32A2, 0x32A2, Mapped, "\u{5199}", Unspecified),
    (0x32A3, 0x32A3, Mapped, "\u{6B63}", Unspecified),
    (0x32A4, 0x32A4, Mapped, "\u{4E0A}", Unspecified),
    (0x32A5, 0x32A5, Mapped, "\u{4E2D}", Unspecified),
    (0x32A6, 0x32A6, Mapped, "\u{4E0B}", Unspecified),
    (0x32A7, 0x32A7, Mapped, "\u{5DE6}", Unspecified),
    (0x32A8, 0x32A8, Mapped, "\u{53F3}", Unspecified),
    (0x32A9, 0x32A9, Mapped, "\u{533B}", Unspecified),
    (0x32AA, 0x32AA, Mapped, "\u{5B97}", Unspecified),
    (0x32AB, 0x32AB, Mapped, "\u{5B66}", Unspecified),
    (0x32AC, 0x32AC, Mapped, "\u{76E3}", Unspecified),
    (0x32AD, 0x32AD, Mapped, "\u{4F01}", Unspecified),
    (0x32AE, 0x32AE, Mapped, "\u{8CC7}", Unspecified),
    (0x32AF, 0x32AF, Mapped, "\u{5354}", Unspecified),
    (0x32B0, 0x32B0, Mapped, "\u{591C}", Unspecified),
    (0x32B1, 0x32B1, Mapped, "36", Unspecified),
    (0x32B2, 0x32B2, Mapped, "37", Unspecified),
    (0x32B3, 0x32B3, Mapped, "38", Unspecified),
    (0x32B4, 0x32B4, Mapped, "39", Unspecified),
    (0x32B5, 0x32B5, Mapped, "40", Unspecified),
    (0x32B6, 0x32B6, Mapped, "41", Unspecified),
    (0x32B7, 0x32B7, Mapped, "42", Unspecified),
    (0x32B8, 0x32B8, Mapped, "43", Unspecified),
    (0x32B9, 0x32B9, Mapped, "44", Unspecified),
    (0x32BA, 0x32BA, Mapped, "45", Unspecified),
    (0x32BB, 0x32BB, Mapped, "46", Unspecified),
    (0x32BC, 0x32BC, Mapped, "47", Unspecified),
    (0x32BD, 0x32BD, Mapped, "48", Unspecified),
    (0x32BE, 0x32BE, Mapped, "49", Unspecified),
    (0x32BF, 0x32BF, Mapped, "50", Unspecified),
    (0x32C0, 0x32C0, Mapped, "1\u{6708}", Unspecified),
    (0x32C1, 0x32C1, Mapped, "2\u{6708}", Unspecified),
    (0x32C2, 0x32C2, Mapped, "3\u{6708}", Unspecified),
    (0x32C3, 0x32C3, Mapped, "4\u{6708}", Unspecified),
    (0x32C4, 0x32C4, Mapped, "5\u{6708}", Unspecified),
    (0x32C5, 0x32C5, Mapped, "6\u{6708}", Unspecified),
    (0x32C6, 0x32C6, Mapped, "7\u{6708}", Unspecified),
    (0x32C7, 0x32C7, Mapped, "8\u{6708}", Unspecified),
    (0x32C8, 0x32C8, Mapped, "9\u{6708}", Unspecified),
    (0x32C9, 0x32C9, Mapped, "10\u{6708}", Unspecified),
    (0x32CA, 0x32CA, Mapped, "11\u{6708}", Unspecified),
    (0x32CB, 0x32CB, Mapped, "12\u{6708}", Unspecified),
    (0x32CC, 0x32CC, Mapped, "hg", Unspecified),
    (0x32CD, 0x32CD, Mapped, "erg", Unspecified),
    (0x32CE, 0x32CE, Mapped, "ev", Unspecified),
    (0x32CF, 0x32CF, Mapped, "ltd", Unspecified),
    (0x32D0, 0x32D0, Mapped, "\u{30A2}", Unspecified),
    (0x32D1, 0x32D1, Mapped, "\u{30A4}", Unspecified),
    (0x32D2, 0x32D2, Mapped, "\u{30A6}", Unspecified),
    (0x32D3, 0x32D3, Mapped, "\u{30A8}", Unspecified),
    (0x32D4, 0x32D4, Mapped, "\u{30AA}", Unspecified),
    (0x32D5, 0x32D5, Mapped, "\u{30AB}", Unspecified),
    (0x32D6, 0x32D6, Mapped, "\u{30AD}", Unspecified),
    (0x32D7, 0x32D7, Mapped, "\u{30AF}", Unspecified),
    (0x32D8, 0x32D8, Mapped, "\u{30B1}", Unspecified),
    (0x32D9, 0x32D9, Mapped, "\u{30B3}", Unspecified),
    (0x32DA, 0x32DA, Mapped, "\u{30B5}", Unspecified),
    (0x32DB, 0x32DB, Mapped, "\u{30B7}", Unspecified),
    (0x32DC, 0x32DC, Mapped, "\u{30B9}", Unspecified),
    (0x32DD, 0x32DD, Mapped, "\u{30BB}", Unspecified),
    (0x32DE, 0x32DE, Mapped, "\u{30BD}", Unspecified),
    (0x32DF, 0x32DF, Mapped, "\u{30BF}", Unspecified),
    (0x32E0, 0x32E0, Mapped, "\u{30C1}", Unspecified),
    (0x32E1, 0x32E1, Mapped, "\u{30C4}", Unspecified),
    (0x32E2, 0x32E2, Mapped, "\u{30C6}", Unspecified),
    (0x32E3, 0x32E3, Mapped, "\u{30C8}", Unspecified),
    (0x32E4, 0x32E4, Mapped, "\u{30CA}", Unspecified),
    (0x32E5, 0x32E5, Mapped, "\u{30CB}", Unspecified),
    (0x32E6, 0x32E6, Mapped, "\u{30CC}", Unspecified),
    (0x32E7, 0x32E7, Mapped, "\u{30CD}", Unspecified),
    (0x32E8, 0x32E8, Mapped, "\u{30CE}", Unspecified),
    (0x32E9, 0x32E9, Mapped, "\u{30CF}", Unspecified),
    (0x32EA, 0x32EA, Mapped, "\u{30D2}", Unspecified),
    (0x32EB, 0x32EB, Mapped, "\u{30D5}", Unspecified),
    (0x32EC, 0x32EC, Mapped, "\u{30D8}", Unspecified),
    (0x32ED, 0x32ED, Mapped, "\u{30DB}", Unspecified),
    (0x32EE, 0x32EE, Mapped, "\u{30DE}", Unspecified),
    (0x32EF, 0x32EF, Mapped, "\u{30DF}", Unspecified),
    (0x32F0, 0x32F0, Mapped, "\u{30E0}", Unspecified),
    (0x32F1, 0x32F1, Mapped, "\u{30E1}", Unspecified),
    (0x32F2, 0x32F2, Mapped, "\u{30E2}", Unspecified),
    (0x32F3, 0x32F3, Mapped, "\u{30E4}", Unspecified),
    (0x32F4, 0x32F4, Mapped, "\u{30E6}", Unspecified),
    (0x32F5, 0x32F5, Mapped, "\u{30E8}", Unspecified),
    (0x32F6, 0x32F6, Mapped, "\u{30E9}", Unspecified),
    (0x32F7, 0x32F7, Mapped, "\u{30EA}", Unspecified),
    (0x32F8, 0x32F8, Mapped, "\u{30EB}", Unspecified),
    (0x32F9, 0x32F9, Mapped, "\u{30EC}", Unspecified),
    (0x32FA, 0x32FA, Mapped, "\u{30ED}", Unspecified),
    (0x32FB, 0x32FB, Mapped, "\u{30EF}", Unspecified),
    (0x32FC, 0x32FC, Mapped, "\u{30F0}", Unspecified),
    (0x32FD, 0x32FD, Mapped, "\u{30F1}", Unspecified),
    (0x32FE, 0x32FE, Mapped, "\u{30F2}", Unspecified),
    (0x32FF, 0x32FF, Mapped, "\u{4EE4}\u{548C}", Unspecified),
    (0x3300, 0x3300, Mapped, "\u{30A2}\u{30D1}\u{30FC}\u{30C8}", Unspecified),
    (0x3301, 0x3301, Mapped, "\u{30A2}\u{30EB}\u{30D5}\u{30A1}", Unspecified),
    (0x3302, 0x3302, Mapped, "\u{30A2}\u{30F3}\u{30DA}\u{30A2}", Unspecified),
    (0x3303, 0x3303, Mapped, "\u{30A2}\u{30FC}\u{30EB}", Unspecified),
    (0x3304, 0x3304, Mapped, "\u{30A4}\u{30CB}\u{30F3}\u{30B0}", Unspecified),
    (0x3305, 0x3305, Mapped, "\u{30A4}\u{30F3}\u{30C1}", Unspecified),
    (0x3306, 0x3306, Mapped, "\u{30A6}\u{30A9}\u{30F3}", Unspecified),
    (0x3307, 0x3307, Mapped, "\u{30A8}\u{30B9}\u{30AF}\u{30FC}\u{30C9}", Unspecified),
    (0x3308, 0x3308, Mapped, "\u{30A8}\u{30FC}\u{30AB}\u{30FC}", Unspecified),
    (0x3309, 0x3309, Mapped, "\u{30AA}\u{30F3}\u{30B9}", Unspecified),
    (0x330A, 0x330A, Mapped, "\u{30AA}\u{30FC}\u{30E0}", Unspecified),
    (0x330B, 0x330B, Mapped, "\u{30AB}\u{30A4}\u{30EA}", Unspecified),
    (0x330C, 0x330C, Mapped, "\u{30AB}\u{30E9}\u{30C3}\u{30C8}", Unspecified),
    (0x330D, 0x330D, Mapped, "\u{30AB}\u{30ED}\u{30EA}\u{30FC}", Unspecified),
    (0x330E, 0x330E, Mapped, "\u{30AC}\u{30ED}\u{30F3}", Unspecified),
    (0x330F, 0x330F, Mapped, "\u{30AC}\u{30F3}\u{30DE}", Unspecified),
    (0x3310, 0x3310, Mapped, "\u{30AE}\u{30AC}", Unspecified),
    (0x3311, 0x3311, Mapped, "\u{30AE}\u{30CB}\u{30FC}", Unspecified),
    (0x3312, 0x3312, Mapped, "\u{30AD}\u{30E5}\u{30EA}\u{30FC}", Unspecified),
    (0x3313, 0x3313, Mapped, "\u{30AE}\u{30EB}\u{30C0}\u{30FC}", Unspecified),
    (0x3314, 0x3314, Mapped, "\u{30AD}\u{30ED}", Unspecified),
    (0x3315, 0x3315, Mapped, "\u{30AD}\u{30ED}\u{30B0}\u{30E9}\u{30E0}", Unspecified),
    (0x3316, 0x3316, Mapped, "\u{30AD}\u{30ED}\u{30E1}\u{30FC}\u{30C8}\u{30EB}", Unspecified),
    (0x3317, 0x3317, Mapped, "\u{30AD}\u{30ED}\u{30EF}\u{30C3}\u{30C8}", Unspecified),
    (0x3318, 0x3318, Mapped, "\u{30B0}\u{30E9}\u{30E0}", Unspecified),
    (0x3319, 0x3319, Mapped, "\u{30B0}\u{30E9}\u{30E0}\u{30C8}\u{30F3}", Unspecified),
    (0x331A, 0x331A, Mapped, "\u{30AF}\u{30EB}\u{30BC}\u{30A4}\u{30ED}", Unspecified),
    (0x331B, 0x331B, Mapped, "\u{30AF}\u{30ED}\u{30FC}\u{30CD}", Unspecified),
    (0x331C, 0x331C, Mapped, "\u{30B1}\u{30FC}\u{30B9}", Unspecified),
    (0x331D, 0x331D, Mapped, "\u{30B3}\u{30EB}\u{30CA}", Unspecified),
    (0x331E, 0x331E, Mapped, "\u{30B3}\u{30FC}\u{30DD}", Unspecified),
    (0x331F, 0x331F, Mapped, "\u{30B5}\u{30A4}\u{30AF}\u{30EB}", Unspecified),
    (0x3320, 0x3320, Mapped, "\u{30B5}\u{30F3}\u{30C1}\u{30FC}\u{30E0}", Unspecified),
    (0x3321, 0x3321, Mapped, "\u{30B7}\u{30EA}\u{30F3}\u{30B0}", Unspecified),
    (0x3322, 0x3322, Mapped, "\u{30BB}\u{30F3}\u{30C1}", Unspecified),
    (0x3323, 0x3323, Mapped, "\u{30BB}\u{30F3}\u{30C8}", Unspecified),
    (0x3324, 0x3324, Mapped, "\u{30C0}\u{30FC}\u{30B9}", Unspecified),
    (0x3325, 0x3325, Mapped, "\u{30C7}\u{30B7}", Unspecified),
    (0x3326, 0x3326, Mapped, "\u{30C9}\u{30EB}", Unspecified),
    (0x3327, 0x3327, Mapped, "\u{30C8}\u{30F3}", Unspecified),
    (0x3328, 0x3328, Mapped, "\u{30CA}\u{30CE}", Unspecified),
    (0x3329, 0x3329, Mapped, "\u{30CE}\u{30C3}\u{30C8}", Unspecified),
    (0x332A, 0x332A, Mapped, "\u{30CF}\u{30A4}\u{30C4}", Unspecified),
    (0x332B, 0x332B, Mapped, "\u{30D1}\u{30FC}\u{30BB}\u{30F3}\u{30C8}", Unspecified),
    (0x332C, 0x332C, Mapped, "\u{30D1}\u{30FC}\u{30C4}", Unspecified),
    (0x332D, 0x332D, Mapped, "\u{30D0}\u{30FC}\u{30EC}\u{30EB}", Unspecified),
    (0x332E, 0x332E, Mapped, "\u{30D4}\u{30A2}\u{30B9}\u{30C8}\u{30EB}", Unspecified),
    (0x332F, 0x332F, Mapped, "\u{30D4}\u{30AF}\u{30EB}", Unspecified),
    (0x3330, 0x3330, Mapped, "\u{30D4}\u{30B3}", Unspecified),
    (0x3331, 0x3331, Mapped, "\u{30D3}\u{30EB}", Unspecified),
    (0x3332, 0x3332, Mapped, "\u{30D5}\u{30A1}\u{30E9}\u{30C3}\u{30C9}", Unspecified),
    (0x3333, 0x3333, Mapped, "\u{30D5}\u{30A3}\u{30FC}\u{30C8}", Unspecified),
    (0x3334, 0x3334, Mapped, "\u{30D6}\u{30C3}\u{30B7}\u{30A7}\u{30EB}", Unspecified),
    (0x3335, 0x3335, Mapped, "\u{30D5}\u{30E9}\u{30F3}", Unspecified),
    (0x3336, 0x3336, Mapped, "\u{30D8}\u{30AF}\u{30BF}\u{30FC}\u{30EB}", Unspecified),
    (0x3337, 0x3337, Mapped, "\u{30DA}\u{30BD}", Unspecified),
    (0x3338, 0x3338, Mapped, "\u{30DA}\u{30CB}\u{30D2}", Unspecified),
    (0x3339, 0x3339, Mapped, "\u{30D8}\u{30EB}\u{30C4}", Unspecified),
    (0x333A, 0x333A, Mapped, "\u{30DA}\u{30F3}\u{30B9}", Unspecified),
    (0x333B, 0x333B, Mapped, "\u{30DA}\u{30FC}\u{30B8}", Unspecified),
    (0x333C, 0x333C, Mapped, "\u{30D9}\u{30FC}\u{30BF}", Unspecified),
    (0x333D, 0x333D, Mapped, "\u{30DD}\u{30A4}\u{30F3}\u{30C8}", Unspecified),
    (0x333E, 0x333E, Mapped, "\u{30DC}\u{30EB}\u{30C8}", Unspecified),
    (0x333F, 0x333F, Mapped, "\u{30DB}\u{30F3}", Unspecified),
    (0x3340, 0x3340, Mapped, "\u{30DD}\u{30F3}\u{30C9}", Unspecified),
    (0x3341, 0x3341, Mapped, "\u{30DB}\u{30FC}\u{30EB}", Unspecified),
    (0x3342, 0x3342, Mapped, "\u{30DB}\u{30FC}\u{30F3}", Unspecified),
    (0x3343, 0x3343, Mapped, "\u{30DE}\u{30A4}\u{30AF}\u{30ED}", Unspecified),
    (0x3344, 0x3344, Mapped, "\u{30DE}\u{30A4}\u{30EB}", Unspecified),
    (0x3345, 0x3345, Mapped, "\u{30DE}\u{30C3}\u{30CF}", Unspecified),
    (0x3346, 0x3346, Mapped, "\u{30DE}\u{30EB}\u{30AF}", Unspecified),
    (0x3347, 0x3347, Mapped, "\u{30DE}\u{30F3}\u{30B7}\u{30E7}\u{30F3}", Unspecified),
    (0x3348, 0x3348, Mapped, "\u{30DF}\u{30AF}\u{30ED}\u{30F3}", Unspecified),
    (0x3349, 0x3349, Mapped, "\u{30DF}\u{30EA}", Unspecified),
    (0x334A, 0x334A, Mapped, "\u{30DF}\u{30EA}\u{30D0}\u{30FC}\u{30EB}", Unspecified),
    (0x334B, 0x334B, Mapped, "\u{30E1}\u{30AC}", Unspecified),
    (0x334C, 0x334C, Mapped, "\u{30E1}\u{30AC}\u{30C8}\u{30F3}", Unspecified),
    (0x334D, 0x334D, Mapped, "\u{30E1}\u{30FC}\u{30C8}\u{30EB}", Unspecified),
    (0x334E, 0x334E, Mapped, "\u{30E4}\u{30FC}\u{30C9}", Unspecified),
    (0x334F, 0x334F, Mapped, "\u{30E4}\u{30FC}\u{30EB}", Unspecified),
    (0x3350, 0x3350, Mapped, "\u{30E6}\u{30A2}\u{30F3}", Unspecified),
    (0x3351, 0x3351, Mapped, "\u{30EA}\u{30C3}\u{30C8}\u{30EB}", Unspecified),
    (0x3352, 0x3352, Mapped, "\u{30EA}\u{30E9}", Unspecified),
    (0x3353, 0x3353, Mapped, "\u{30EB}\u{30D4}\u{30FC}", Unspecified),
    (0x3354, 0x3354, Mapped, "\u{30EB}\u{30FC}\u{30D6}\u{30EB}", Unspecified),
    (0x3355, 0x3355, Mapped, "\u{30EC}\u{30E0}", Unspecified),
    (0x3356, 0x3356, Mapped, "\u{30EC}\u{30F3}\u{30C8}\u{30B2}\u{30F3}", Unspecified),
    (0x3357, 0x3357, Mapped, "\u{30EF}\u{30C3}\u{30C8}", Unspecified),
    (0x3358, 0x3358, Mapped, "0\u{70B9}", Unspecified),
    (0x3359, 0x3359, Mapped, "1\u{70B9}", Unspecified),
    (0x335A, 0x335A, Mapped, "2\u{70B9}", Unspecified),
    (0x335B, 0x335B, Mapped, "3\u{70B9}", Unspecified),
    (0x335C, 0x335C, Mapped, "4\u{70B9}", Unspecified),
    (0x335D, 0x335D, Mapped, "5\u{70B9}", Unspecified),
    (0x335E, 0x335E, Mapped, "6\u{70B9}", Unspecified),
    (0x335F, 0x335F, Mapped, "7\u{70B9}", Unspecified),
    (0x3360, 0x3360, Mapped, "8\u{70B9}", Unspecified),
    (0x3361, 0x3361, Mapped, "9\u{70B9}", Unspecified),
    (0x3362, 0x3362, Mapped, "10\u{70B9}", Unspecified),
    (0x3363, 0x3363, Mapped, "11\u{70B9}", Unspecified),
    (0x3364, 0x3364, Mapped, "12\u{70B9}", Unspecified),
    (0x3365, 0x3365, Mapped, "13\u{70B9}", Unspecified),
    (0x3366, 0x3366, Mapped, "14\u{70B9}", Unspecified),
    (0x3367, 0x3367, Mapped, "15\u{70B9}", Unspecified),
    (0x3368, 0x3368, Mapped, "16\u{70B9}", Unspecified),
    (0x3369, 0x3369, Mapped, "17\u{70B9}", Unspecified),
    (0x336A, 0x336A, Mapped, "18\u{70B9}", Unspecified),
    (0x336B, 0x336B, Mapped, "19\u{70B9}", Unspecified),
    (0x336C, 0x336C, Mapped, "20\u{70B9}", Unspecified),
    (0x336D, 0x336D, Mapped, "21\u{70B9}", Unspecified),
    (0x336E, 0x336E, Mapped, "22\u{70B9}", Unspecified),
    (0x336F, 0x336F, Mapped, "23\u{70B9}", Unspecified),
    (0x3370, 0x3370, Mapped, "24\u{70B9}", Unspecified),
    (0x3371, 0x3371, Mapped, "hpa", Unspecified),
    (0x3372, 0x3372, Mapped, "da", Unspecified),
    (0x3373, 0x3373, Mapped, "au", Unspecified),
    (0x3374, 0x3374, Mapped, "bar", Unspecified),
    (0x3375, 0x3375, Mapped, "ov", Unspecified),
    (0x3376, 0x3376, Mapped, "pc", Unspecified),
    (0x3377, 0x3377, Mapped, "dm", Unspecified),
    (0x3378, 0x3378, Mapped, "dm2", Unspecified),
    (0x3379, 0x3379, Mapped, "dm3", Unspecified),
    (0x337A, 0x337A, Mapped, "iu", Unspecified),
    (0x337B, 0x337B, Mapped, "\u{5E73}\u{6210}", Unspecified),
    (0x337C, 0x337C, Mapped, "\u{662D}\u{548C}", Unspecified),
    (0x337D, 0x337D, Mapped, "\u{5927}\u{6B63}", Unspecified),
    (0x337E, 0x337E, Mapped, "\u{660E}\u{6CBB}", Unspecified),
    (0x337F, 0x337F, Mapped, "\u{682A}\u{5F0F}\u{4F1A}\u{793E}", Unspecified),
    (0x3380, 0x3380, Mapped, "pa", Unspecified),
    (0x3381, 0x3381, Mapped, "na", Unspecified),
    (0x3382, 0x3382, Mapped, "\u{3BC}a", Unspecified),
    (0x3383, 0x3383, Mapped, "ma", Unspecified),
    (0x3384, 0x3384, Mapped, "ka", Unspecified),
    (0x3385, 0x3385, Mapped, "kb", Unspecified),
    (0x3386, 0x3386, Mapped, "mb", Unspecified),
    (0x3387, 0x3387, Mapped, "gb", Unspecified),
    (0x3388, 0x3388, Mapped, "cal", Unspecified),
    (0x3389, 0x3389, Mapped, "kcal", Unspecified),
    (0x338A, 0x338A, Mapped, "pf", Unspecified),
    (0x338B, 0x338B, Mapped, "nf", Unspecified),
    (0x338C, 0x338C, Mapped, "\u{3BC}f", Unspecified),
    (0x338D, 0x338D, Mapped, "\u{3BC}g", Unspecified),
    (0x338E, 0x338E, Mapped, "mg", Unspecified),
    (0x338F, 0x338F, Mapped, "kg", Unspecified),
    (0x3390, 0x3390, Mapped, "hz", Unspecified),
    (0x3391, 0x3391, Mapped, "khz", Unspecified),
    (0x3392, 0x3392, Mapped, "mhz", Unspecified),
    (0x3393, 0x3393, Mapped, "ghz", Unspecified),
    (0x3394, 0x3394, Mapped, "thz", Unspecified),
    (0x3395, 0x3395, Mapped, "\u{3BC}l", Unspecified),
    (0x3396, 0x3396, Mapped, "ml", Unspecified),
    (0x3397, 0x3397, Mapped, "dl", Unspecified),
    (0x3398, 0x3398, Mapped, "kl", Unspecified),
    (0x3399, 0x3399, Mapped, "fm", Unspecified),
    (0x339A, 0x339A, Mapped, "nm", Unspecified),
    (0x339B, 0x339B, Mapped, "\u{3BC}m", Unspecified),
    (0x339C, 0x339C, Mapped, "mm", Unspecified),
    (0x339D, 0x339D, Mapped, "cm", Unspecified),
    (0x339E, 0x339E, Mapped, "km", Unspecified),
    (0x339F, 0x339F, Mapped, "mm2", Unspecified),
    (0x33A0, 0x33A0, Mapped, "cm2", Unspecified),
    (0x33A1, 0x33A1, Mapped, "m2", Unspecified),
    (0x33A2, 0x33A2, Mapped, "km2", Unspecified),
    (0x33A3, 0x33A3, Mapped, "mm3", Unspecified),
    (0x33A4, 0x33A4, Mapped, "cm3", Unspecified),
    (0x33A5, 0x33A5, Mapped, "m3", Unspecified),
    (0x33A6, 0x33A6, Mapped, "km3", Unspecified),
    (0x33A7, 0x33A7, Mapped, "m\u{2215}s", Unspecified),
    (0x33A8, 0x33A8, Mapped, "m\u{2215}s2", Unspecified),
    (0x33A9, 0x33A9, Mapped, "pa", Unspecified),
    (0x33AA, 0x33AA, Mapped, "kpa", Unspecified),
    (0x33AB, 0x33AB, Mapped, "mpa", Unspecified),
    (0x33AC, 0x33AC, Mapped, "gpa", Unspecified),
    (0x33AD, 0x33AD, Mapped, "rad", Unspecified),
    (0x33AE, 0x33AE, Mapped, "rad\u{2215}s", Unspecified),
    (0x33AF, 0x33AF, Mapped, "rad\u{2215}s2", Unspecified),
    (0x33B0, 0x33B0, Mapped, "ps", Unspecified),
    (0x33B1, 0x33B1, Mapped, "ns", Unspecified),
    (0x33B2, 0x33B2, Mapped, "\u{3BC}s", Unspecified),
    (0x33B3, 0x33B3, Mapped, "ms", Unspecified),
    (0x33B4, 0x33B4, Mapped, "pv", Unspecified),
    (0x33B5, 0x33B5, Mapped, "nv", Unspecified),
    (0x33B6, 0x33B6, Mapped, "\u{3BC}v", Unspecified),
    (0x33B7, 0x33B7, Mapped, "mv", Unspecified),
    (0x33B8, 0x33B8, Mapped, "kv", Unspecified),
    (0x33B9, 0x33B9, Mapped, "mv", Unspecified),
    (0x33BA, 0x33BA, Mapped, "pw", Unspecified),
    (0x33BB, 0x33BB, Mapped, "nw", Unspecified),
    (0x33BC, 0x33BC, Mapped, "\u{3BC}w", Unspecified),
    (0x33BD, 0x33BD, Mapped, "mw", Unspecified),
    (0x33BE, 0x33BE, Mapped, "kw", Unspecified),
    (0x33BF, 0x33BF, Mapped, "mw", Unspecified),
    (0x33C0, 0x33C0, Mapped, "k\u{3C9}", Unspecified),
    (0x33C1, 0x33C1, Mapped, "m\u{3C9}", Unspecified),
    (0x33C2, 0x33C2, Disallowed, "", Unspecified),
    (0x33C3, 0x33C3, Mapped, "bq", Unspecified),
    (0x33C4, 0x33C4, Mapped, "cc", Unspecified),
    (0x33C5, 0x33C5, Mapped, "cd", Unspecified),
    (0x33C6, 0x33C6, Mapped, "c\u{2215}kg", Unspecified),
    (0x33C7, 0x33C7, Disallowed, "", Unspecified),
    (0x33C8, 0x33C8, Mapped, "db", Unspecified),
    (0x33C9, 0x33C9, Mapped, "gy", Unspecified),
    (0x33CA, 0x33CA, Mapped, "ha", Unspecified),
    (0x33CB, 0x33CB, Mapped, "hp", Unspecified),
    (0x33CC, 0x33CC, Mapped, "in", Unspecified),
    (0x33CD, 0x33CD, Mapped, "kk", Unspecified),
    (0x33CE, 0x33CE, Mapped, "km", Unspecified),
    (0x33CF, 0x33CF, Mapped, "kt", Unspecified),
    (0x33D0, 0x33D0, Mapped, "lm", Unspecified),
    (0x33D1, 0x33D1, Mapped, "ln", Unspecified),
    (0x33D2, 0x33D2, Mapped, "log", Unspecified),
    (0x33D3, 0x33D3, Mapped, "lx", Unspecified),
    (0x33D4, 0x33D4, Mapped, "mb", Unspecified),
    (0x33D5, 0x33D5, Mapped, "mil", Unspecified),
    (0x33D6, 0x33D6, Mapped, "mol", Unspecified),
    (0x33D7, 0x33D7, Mapped, "ph", Unspecified),
    (0x33D8, 0x33D8, Disallowed, "", Unspecified),
    (0x33D9, 0x33D9, Mapped, "ppm", Unspecified),
    (0x33DA, 0x33DA, Mapped, "pr", Unspecified),
    (0x33DB, 0x33DB, Mapped, "sr", Unspecified),
    (0x33DC, 0x33DC, Mapped, "sv", Unspecified),
    (0x33DD, 0x33DD, Mapped, "wb", Unspecified),
    (0x33DE, 0x33DE, Mapped, "v\u{2215}m", Unspecified),
    (0x33DF, 0x33DF, Mapped, "a\u{2215}m", Unspecified),
    (0x33E0, 0x33E0, Mapped, "1\u{65E5}", Unspecified),
    (0x33E1, 0x33E1, Mapped, "2\u{65E5}", Unspecified),
    (0x33E2, 0x33E2, Mapped, "3\u{65E5}", Unspecified),
    (0x33E3, 0x33E3, Mapped, "4\u{65E5}", Unspecified),
    (0x33E4, 0x33E4, Mapped, "5\u{65E5}", Unspecified),
    (0x33E5, 0x33E5, Mapped, "6\u{65E5}", Unspecified),
    (0x33E6, 0x33E6, Mapped, "7\u{65E5}", Unspecified),
    (0x33E7, 0x33E7, Mapped, "8\u{65E5}", Unspecified),
    (0x33E8, 0x33E8, Mapped, "9\u{65E5}", Unspecified),
    (0x33E9, 0x33E9, Mapped, "10\u{65E5}", Unspecified),
    (0x33EA, 0x33EA, Mapped, "11\u{65E5}", Unspecified),
    (0x33EB, 0x33EB, Mapped, "12\u{65E5}", Unspecified),
    (0x33EC, 0x33EC, Mapped, "13\u{65E5}", Unspecified),
    (0x33ED, 0x33ED, Mapped, "14\u{65E5}", Unspecified),
    (0x33EE, 0x33EE, Mapped, "15\u{65E5}", Unspecified),
    (0x33EF, 0x33EF, Mapped, "16\u{65E5}", Unspecified),
    (0x33F0, 0x33F0, Mapped, "17\u{65E5}", Unspecified),
    (0x33F1, 0x33F1, Mapped, "18\u{65E5}", Unspecified),
    (0x33F2, 0x33F2, Mapped, "19\u{65E5}", Unspecified),
    (0x33F3, 0x33F3, Mapped, "20\u{65E5}", Unspecified),
    (0x33F4, 0x33F4, Mapped, "21\u{65E5}", Unspecified),
    (0x33F5, 0x33F5, Mapped, "22\u{65E5}", Unspecified),
    (0x33F6, 0x33F6, Mapped, "23\u{65E5}", Unspecified),
    (0x33F7, 0x33F7, Mapped, "24\u{65E5}", Unspecified),
    (0x33F8, 0x33F8, Mapped, "25\u{65E5}", Unspecified),
    (0x33F9, 0x33F9, Mapped, "26\u{65E5}", Unspecified),
    (0x33FA, 0x33FA, Mapped, "27\u{65E5}", Unspecified),
    (0x33FB, 0x33FB, Mapped, "28\u{65E5}", Unspecified),
    (0x33FC, 0x33FC, Mapped, "29\u{65E5}", Unspecified),
    (0x33FD, 0x33FD, Mapped, "30\u{65E5}", Unspecified),
    (0x33FE, 0x33FE, Mapped, "31\u{65E5}", Unspecified),
    (0x33FF, 0x33FF, Mapped, "gal", Unspecified),
    (0x3400, 0x4DBF, Valid, "", Unspecified),
    (0x4DC0, 0x4DFF, Valid, "", Nv8),
    (0x4E00, 0x9FFC, Valid, "", Unspecified),
    (0x9FFD, 0x9FFF, Disallowed, "", Unspecified),
    (0xA000, 0xA48C, Valid, "", Unspecified),
    (0xA48D, 0xA48F, Disallowed, "", Unspecified),
    (0xA490, 0xA4C6, Valid, "", Nv8),
    (0xA4C7, 0xA4CF, Disallowed, "", Unspecified),
    (0xA4D0, 0xA4FD, Valid, "", Unspecified),
    (0xA4FE, 0xA4FF, Valid, "", Nv8),
    (0xA500, 0xA60C, Valid, "", Unspecified),
    (0xA60D, 0xA60F, Valid, "", Nv8),
    (0xA610, 0xA62B, Valid, "", Unspecified),
    (0xA62C, 0xA63F, Disallowed, "", Unspecified),
    (0xA640, 0xA640, Mapped, "\u{A641}", Unspecified),
    (0xA641, 0xA641, Valid, "", Unspecified),
    (0xA642, 0xA642, Mapped, "\u{A643}", Unspecified),
    (0xA643, 0xA643, Valid, "", Unspecified),
    (0xA644, 0xA644, Mapped, "\u{A645}", Unspecified),
    (0xA645, 0xA645, Valid, "", Unspecified),
    (0xA646, 0xA646, Mapped, "\u{A647}", Unspecified),
    (0xA647, 0xA647, Valid, "", Unspecified),
    (0xA648, 0xA648, Mapped, "\u{A649}", Unspecified),
    (0xA649, 0xA649, Valid, "", Unspecified),
    (0xA64A, 0xA64A, Mapped, "\u{A64B}", Unspecified),
    (0xA64B, 0xA64B, Valid, "", Unspecified),
    (0xA64C, 0xA64C, Mapped, "\u{A64D}", Unspecified),
    (0xA64D, 0xA64D, Valid, "", Unspecified),
    (0xA64E, 0xA64E, Mapped, "\u{A64F}", Unspecified),
    (0xA64F, 0xA64F, Valid, "", Unspecified),
    (0xA650, 0xA650, Mapped, "\u{A651}", Unspecified),
    (0xA651, 0xA651, Valid, "", Unspecified),
    (0xA652, 0xA652, Mapped, "\u{A653}", Unspecified),
    (0xA653, 0xA653, Valid, "", Unspecified),
    (0xA654, 0xA654, Mapped, "\u{A655}", Unspecified),
    (0xA655, 0xA655, Valid, "", Unspecified),
    (0xA656, 0xA656, Mapped, "\u{A657}", Unspecified),
    (0xA657, 0xA657, Valid, "", Unspecified),
    (0xA658, 0xA658, Mapped, "\u{A659}", Unspecified),
    (0xA659, 0xA659, Valid, "", Unspecified),
    (0xA65A, 0xA65A, Mapped, "\u{A65B}", Unspecified),
    (0xA65B, 0xA65B, Valid, "", Unspecified),
    (0xA65C, 0xA65C, Mapped, "\u{A65D}", Unspecified),
    (0xA65D, 0xA65D, Valid, "", Unspecified),
    (0xA65E, 0xA65E, Mapped, "\u{A65F}", Unspecified),
    (0xA65F, 0xA65F, Valid, "", Unspecified),
    (0xA660, 0xA660, Mapped, "\u{A661}", Unspecified),
    (0xA661, 0xA661, Valid, "", Unspecified),
    (0xA662, 0xA662, Mapped, "\u{A663}", Unspecified),
    (0xA663, 0xA663, Valid, "", Unspecified),
    (0xA664, 0xA664, Mapped, "\u{A665}", Unspecified),
    (0xA665, 0xA665, Valid, "", Unspecified),
    (0xA666, 0xA666, Mapped, "\u{A667}", Unspecified),
    (0xA667, 0xA667, Valid, "", Unspecified),
    (0xA668, 0xA668, Mapped, "\u{A669}", Unspecified),
    (0xA669, 0xA669, Valid, "", Unspecified),
    (0xA66A, 0xA66A, Mapped, "\u{A66B}", Unspecified),
    (0xA66B, 0xA66B, Valid, "", Unspecified),
    (0xA66C, 0xA66C, Mapped, "\u{A66D}", Unspecified),
    (0xA66D, 0xA66F, Valid, "", Unspecified),
    (0xA670, 0xA673, Valid, "", Nv8),
    (0xA674, 0xA67D, Valid, "", Unspecified),
    (0xA67E, 0xA67E, Valid, "", Nv8),
    (0xA67F, 0xA67F, Valid, "", Unspecified),
    (0xA680, 0xA680, Mapped, "\u{A681}", Unspecified),
    (0xA681, 0xA681, Valid, "", Unspecified),
    (0xA682, 0xA682, Mapped, "\u{A683}", Unspecified),
    (0xA683, 0xA683, Valid, "", Unspecified),
    (0xA684, 0xA684, Mapped, "\u{A685}", Unspecified),
    (0xA685, 0xA685, Valid, "", Unspecified),
    (0xA686, 0xA686, Mapped, "\u{A687}", Unspecified),
    (0xA687, 0xA687, Valid, "", Unspecified),
    (0xA688, 0xA688, Mapped, "\u{A689}", Unspecified),
    (0xA689, 0xA689, Valid, "", Unspecified),
    (0xA68A, 0xA68A, Mapped, "\u{A68B}", Unspecified),
    (0xA68B, 0xA68B, Valid, "", Unspecified),
    (0xA68C, 0xA68C, Mapped, "\u{A68D}", Unspecified),
    (0xA68D, 0xA68D, Valid, "", Unspecified),
    (0xA68E, 0xA68E, Mapped, "\u{A68F}", Unspecified),
    (0xA68F, 0xA68F, Valid, "", Unspecified),
    (0xA690, 0xA690, Mapped, "\u{A691}", Unspecified),
    (0xA691, 0xA691, Valid, "", Unspecified),
    (0xA692, 0xA692, Mapped, "\u{A693}", Unspecified),
    (0xA693, 0xA693, Valid, "", Unspecified),
    (0xA694, 0xA694, Mapped, "\u{A695}", Unspecified),
    (0xA695, 0xA695, Valid, "", Unspecified),
    (0xA696, 0xA696, Mapped, "\u{A697}", Unspecified),
    (0xA697, 0xA697, Valid, "", Unspecified),
    (0xA698, 0xA698, Mapped, "\u{A699}", Unspecified),
    (0xA699, 0xA699, Valid, "", Unspecified),
    (0xA69A, 0xA69A, Mapped, "\u{A69B}", Unspecified),
    (0xA69B, 0xA69B, Valid, "", Unspecified),
    (0xA69C, 0xA69C, Mapped, "\u{44A}", Unspecified),
    (0xA69D, 0xA69D, Mapped, "\u{44C}", Unspecified),
    (0xA69E, 0xA6E5, Valid, "", Unspecified),
    (0xA6E6, 0xA6EF, Valid, "", Nv8),
    (0xA6F0, 0xA6F1, Valid, "", Unspecified),
    (0xA6F2, 0xA6F7, Valid, "", Nv8),
    (0xA6F8, 0xA6FF, Disallowed, "", Unspecified),
    (0xA700, 0xA716, Valid, "", Nv8),
    (0xA717, 0xA71F, Valid, "", Unspecified),
    (0xA720, 0xA721, Valid, "", Nv8),
    (0xA722, 0xA722, Mapped, "\u{A723}", Unspecified),
    (0xA723, 0xA723, Valid, "", Unspecified),
    (0xA724, 0xA724, Mapped, "\u{A725}", Unspecified),
    (0xA725, 0xA725, Valid, "", Unspecified),
    (0xA726, 0xA726, Mapped, "\u{A727}", Unspecified),
    (0xA727, 0xA727, Valid, "", Unspecified),
    (0xA728, 0xA728, Mapped, "\u{A729}", Unspecified),
    (0xA729, 0xA729, Valid, "", Unspecified),
    (0xA72A, 0xA72A, Mapped, "\u{A72B}", Unspecified),
    (0xA72B, 0xA72B, Valid, "", Unspecified),
    (0xA72C, 0xA72C, Mapped, "\u{A72D}", Unspecified),
    (0xA72D, 0xA72D, Valid, "", Unspecified),
    (0xA72E, 0xA72E, Mapped, "\u{A72F}", Unspecified),
    (0xA72F, 0xA731, Valid, "", Unspecified),
    (0xA732, 0xA732, Mapped, "\u{A733}", Unspecified),
    (0xA733, 0xA733, Valid, "", Unspecified),
    (0xA734, 0xA734, Mapped, "\u{A735}", Unspecified),
    (0xA735, 0xA735, Valid, "", Unspecified),
    (0xA736, 0xA736, Mapped, "\u{A737}", Unspecified),
    (0xA737, 0xA737, Valid, "", Unspecified),
    (0xA738, 0xA738, Mapped, "\u{A739}", Unspecified),
    (0xA739, 0xA739, Valid, "", Unspecified),
    (0xA73A, 0xA73A, Mapped, "\u{A73B}", Unspecified),
    (0xA73B, 0xA73B, Valid, "", Unspecified),
    (0xA73C, 0xA73C, Mapped, "\u{A73D}", Unspecified),
    (0xA73D, 0xA73D, Valid, "", Unspecified),
    (0xA73E, 0xA73E, Mapped, "\u{A73F}", Unspecified),
    (0xA73F, 0xA73F, Valid, "", Unspecified),
    (0xA740, 0xA740, Mapped, "\u{A741}", Unspecified),
    (0xA741, 0xA741, Valid, "", Unspecified),
    (0xA742, 0xA742, Mapped, "\u{A743}", Unspecified),
    (0xA743, 0xA743, Valid, "", Unspecified),
    (0xA744, 0xA744, Mapped, "\u{A745}", Unspecified),
    (0xA745, 0xA745, Valid, "", Unspecified),
    (0xA746, 0xA746, Mapped, "\u{A747}", Unspecified),
    (0xA747, 0xA747, Valid, "", Unspecified),
    (0xA748, 0xA748, Mapped, "\u{A749}", Unspecified),
    (0xA749, 0xA749, Valid, "", Unspecified),
    (0xA74A, 0xA74A, Mapped, "\u{A74B}", Unspecified),
    (0xA74B, 0xA74B, Valid, "", Unspecified),
    (0xA74C, 0xA74C, Mapped, "\u{A74D}", Unspecified),
    (0xA74D, 0xA74D, Valid, "", Unspecified),
    (0xA74E, 0xA74E, Mapped, "\u{A74F}", Unspecified),
    (0xA74F, 0xA74F, Valid, "", Unspecified),
    (0xA750, 0xA750, Mapped, "\u{A751}", Unspecified),
    (0xA751, 0xA751, Valid, "", Unspecified),
    (0xA752, 0xA752, Mapped, "\u{A753}", Unspecified),
    (0xA753, 0xA753, Valid, "", Unspecified),
    (0xA754, 0xA754, Mapped, "\u{A755}", Unspecified),
    (0xA755, 0xA755, Valid, "", Unspecified),
    (0xA756, 0xA756, Mapped, "\u{A757}", Unspecified),
    (0xA757, 0xA757, Valid, "", Unspecified),
    (0xA758, 0xA758, Mapped, "\u{A759}", Unspecified),
    (0xA759, 0xA759, Valid, "", Unspecified),
    (0xA75A, 0xA75A, Mapped, "\u{A75B}", Unspecified),
    (0xA75B, 0xA75B, Valid, "", Unspecified),
    (0xA75C, 0xA75C, Mapped, "\u{A75D}", Unspecified),
    (0xA75D, 0xA75D, Valid, "", Unspecified),
    (0xA75E, 0xA75E, Mapped, "\u{A75F}", Unspecified),
    (0xA75F, 0xA75F, Valid, "", Unspecified),
    (0xA760, 0xA760, Mapped, "\u{A761}", Unspecified),
    (0xA761, 0xA761, Valid, "", Unspecified),
    (0xA762, 0xA762, Mapped, "\u{A763}", Unspecified),
    (0xA763, 0xA763, Valid, "", Unspecified),
    (0xA764, 0xA764, Mapped, "\u{A765}", Unspecified),
    (0xA765, 0xA765, Valid, "", Unspecified),
    (0xA766, 0xA766, Mapped, "\u{A767}", Unspecified),
    (0xA767, 0xA767, Valid, "", Unspecified),
    (0xA768, 0xA768, Mapped, "\u{A769}", Unspecified),
    (0xA769, 0xA769, Valid, "", Unspecified),
    (0xA76A, 0xA76A, Mapped, "\u{A76B}", Unspecified),
    (0xA76B, 0xA76B, Valid, "", Unspecified),
    (0xA76C, 0xA76C, Mapped, "\u{A76D}", Unspecified),
    (0xA76D, 0xA76D, Valid, "", Unspecified),
    (0xA76E, 0xA76E, Mapped, "\u{A76F}", Unspecified),
    (0xA76F, 0xA76F, Valid, "", Unspecified),
    (0xA770, 0xA770, Mapped, "\u{A76F}", Unspecified),
    (0xA771, 0xA778, Valid, "", Unspecified),
    (0xA779, 0xA779, Mapped, "\u{A77A}", Unspecified),
    (0xA77A, 0xA77A, Valid, "", Unspecified),
    (0xA77B, 0xA77B, Mapped, "\u{A77C}", Unspecified),
    (0xA77C, 0xA77C, Valid, "", Unspecified),
    (0xA77D, 0xA77D, Mapped, "\u{1D79}", Unspecified),
    (0xA77E, 0xA77E, Mapped, "\u{A77F}", Unspecified),
    (0xA77F, 0xA77F, Valid, "", Unspecified),
    (0xA780, 0xA780, Mapped, "\u{A781}", Unspecified),
    (0xA781, 0xA781, Valid, "", Unspecified),
    (0xA782, 0xA782, Mapped, "\u{A783}", Unspecified),
    (0xA783, 0xA783, Valid, "", Unspecified),
    (0xA784, 0xA784, Mapped, "\u{A785}", Unspecified),
    (0xA785, 0xA785, Valid, "", Unspecified),
    (0xA786, 0xA786, Mapped, "\u{A787}", Unspecified),
    (0xA787, 0xA788, Valid, "", Unspecified),
    (0xA789, 0xA78A, Valid, "", Nv8),
    (0xA78B, 0xA78B, Mapped, "\u{A78C}", Unspecified),
    (0xA78C, 0xA78C, Valid, "", Unspecified),
    (0xA78D, 0xA78D, Mapped, "\u{265}", Unspecified),
    (0xA78E, 0xA78F, Valid, "", Unspecified),
    (0xA790, 0xA790, Mapped, "\u{A791}", Unspecified),
    (0xA791, 0xA791, Valid, "", Unspecified),
    (0xA792, 0xA792, Mapped, "\u{A793}", Unspecified),
    (0xA793, 0xA795, Valid, "", Unspecified),
    (0xA796, 0xA796, Mapped, "\u{A797}", Unspecified),
    (0xA797, 0xA797, Valid, "", Unspecified),
    (0xA798, 0xA798, Mapped, "\u{A799}", Unspecified),
    (0xA799, 0xA799, Valid, "", Unspecified),
    (0xA79A, 0xA79A, Mapped, "\u{A79B}", Unspecified),
    (0xA79B, 0xA79B, Valid, "", Unspecified),
    (0xA79C, 0xA79C, Mapped, "\u{A79D}", Unspecified),
    (0xA79D, 0xA79D, Valid, "", Unspecified),
    (0xA79E, 0xA79E, Mapped, "\u{A79F}", Unspecified),
    (0xA79F, 0xA79F, Valid, "", Unspecified),
    (0xA7A0, 0xA7A0, Mapped, "\u{A7A1}", Unspecified),
    (0xA7A1, 0xA7A1, Valid, "", Unspecified),
    (0xA7A2, 0xA7A2, Mapped, "\u{A7A3}", Unspecified),
    (0xA7A3, 0xA7A3, Valid, "", Unspecified),
    (0xA7A4, 0xA7A4, Mapped, "\u{A7A5}", Unspecified),
    (0xA7A5, 0xA7A5, Valid, "", Unspecified),
    (0xA7A6, 0xA7A6, Mapped, "\u{A7A7}", Unspecified),
    (0xA7A7, 0xA7A7, Valid, "", Unspecified),
    (0xA7A8, 0xA7A8, Mapped, "\u{A7A9}", Unspecified),
    (0xA7A9, 0xA7A9, Valid, "", Unspecified),
    (0xA7AA, 0xA7AA, Mapped, "\u{266}", Unspecified),
    (0xA7AB, 0xA7AB, Mapped, "\u{25C}", Unspecified),
    (0xA7AC, 0xA7AC, Mapped, "\u{261}", Unspecified),
    (0xA7AD, 0xA7AD, Mapped, "\u{26C}", Unspecified),
    (0xA7AE, 0xA7AE, Mapped, "\u{26A}", Unspecified),
    (0xA7AF, 0xA7AF, Valid, "", Unspecified),
    (0xA7B0, 0xA7B0, Mapped, "\u{29E}", Unspecified),
    (0xA7B1, 0xA7B1, Mapped, "\u{287}", Unspecified),
    (0xA7B2, 0xA7B2, Mapped, "\u{29D}", Unspecified),
    (0xA7B3, 0xA7B3, Mapped, "\u{AB53}", Unspecified),
    (0xA7B4, 0xA7B4, Mapped, "\u{A7B5}", Unspecified),
    (0xA7B5, 0xA7B5, Valid, "", Unspecified),
    (0xA7B6, 0xA7B6, Mapped, "\u{A7B7}", Unspecified),
    (0xA7B7, 0xA7B7, Valid, "", Unspecified),
    (0xA7B8, 0xA7B8, Mapped, "\u{A7B9}", Unspecified),
    (0xA7B9, 0xA7B9, Valid, "", Unspecified),
    (0xA7BA, 0xA7BA, Mapped, "\u{A7BB}", Unspecified),
    (0xA7BB, 0xA7BB, Valid, "", Unspecified),
    (0xA7BC, 0xA7BC, Mapped, "\u{A7BD}", Unspecified),
    (0xA7BD, 0xA7BD, Valid, "", Unspecified),
    (0xA7BE, 0xA7BE, Mapped, "\u{A7BF}", Unspecified),
    (0xA7BF, 0xA7BF, Valid, "", Unspecified),
    (0xA7C0, 0xA7C1, Disallowed, "", Unspecified),
    (0xA7C2, 0xA7C2, Mapped, "\u{A7C3}", Unspecified),
    (0xA7C3, 0xA7C3, Valid, "", Unspecified),
    (0xA7C4, 0xA7C4, Mapped, "\u{A794}", Unspecified),
    (0xA7C5, 0xA7C5, Mapped, "\u{282}", Unspecified),
    (0xA7C6, 0xA7C6, Mapped, "\u{1D8E}", Unspecified),
    (0xA7C7, 0xA7C7, Mapped, "\u{A7C8}", Unspecified),
    (0xA7C8, 0xA7C8, Valid, "", Unspecified),
    (0xA7C9, 0xA7C9, Mapped, "\u{A7CA}", Unspecified),
    (0xA7CA, 0xA7CA, Valid, "", Unspecified),
    (0xA7CB, 0xA7F4, Disallowed, "", Unspecified),
    (0xA7F5, 0xA7F5, Mapped, "\u{A7F6}", Unspecified),
    (0xA7F6, 0xA7F7, Valid, "", Unspecified),
    (0xA7F8, 0xA7F8, Mapped, "\u{127}", Unspecified),
    (0xA7F9, 0xA7F9, Mapped, "\u{153}", Unspecified),
    (0xA7FA, 0xA827, Valid, "", Unspecified),
    (0xA828, 0xA82B, Valid, "", Nv8),
    (0xA82C, 0xA82C, Valid, "", Unspecified),
    (0xA82D, 0xA82F, Disallowed, "", Unspecified),
    (0xA830, 0xA839, Valid, "", Nv8),
    (0xA83A, 0xA83F, Disallowed, "", Unspecified),
    (0xA840, 0xA873, Valid, "", Unspecified),
    (0xA874, 0xA877, Valid, "", Nv8),
    (0xA878, 0xA87F, Disallowed, "", Unspecified),
    (0xA880, 0xA8C5, Valid, "", Unspecified),
    (0xA8C6, 0xA8CD, Disallowed, "", Unspecified),
    (0xA8CE, 0xA8CF, Valid, "", Nv8),
    (0xA8D0, 0xA8D9, Valid, "", Unspecified),
    (0xA8DA, 0xA8DF, Disallowed, "", Unspecified),
    (0xA8E0, 0xA8F7, Valid, "", Unspecified),
    (0xA8F8, 0xA8FA, Valid, "", Nv8),
    (0xA8FB, 0xA8FB, Valid, "", Unspecified),
    (0xA8FC, 0xA8FC, Valid, "", Nv8),
    (0xA8FD, 0xA92D, Valid, "", Unspecified),
    (0xA92E, 0xA92F, Valid, "", Nv8),
    (0xA930, 0xA953, Valid, "", Unspecified),
    (0xA954, 0xA95E, Disallowed, "", Unspecified),
    (0xA95F, 0xA97C, Valid, "", Nv8),
    (0xA97D, 0xA97F, Disallowed, "", Unspecified),
    (0xA980, 0xA9C0, Valid, "", Unspecified),
    (0xA9C1, 0xA9CD, Valid, "", Nv8),
    (0xA9CE, 0xA9CE, Disallowed, "", Unspecified),
    (0xA9CF, 0xA9D9, Valid, "", Unspecified),
    (0xA9DA, 0xA9DD, Disallowed, "", Unspecified),
    (0xA9DE, 0xA9DF, Valid, "", Nv8),
    (0xA9E0, 0xA9FE, Valid, "", Unspecified),
    (0xA9FF, 0xA9FF, Disallowed, "", Unspecified),
    (0xAA00, 0xAA36, Valid, "", Unspecified),
    (0xAA37, 0xAA3F, Disallowed, "", Unspecified),
    (0xAA40, 0xAA4D, Valid, "", Unspecified),
    (0xAA4E, 0xAA4F, Disallowed, "", Unspecified),
    (0xAA50, 0xAA59, Valid, "", Unspecified),
    (0xAA5A, 0xAA5B, Disallowed, "", Unspecified),
    (0xAA5C, 0xAA5F, Valid, "", Nv8),
    (0xAA60, 0xAA76, Valid, "", Unspecified),
    (0xAA77, 0xAA79, Valid, "", Nv8),
    (0xAA7A, 0xAAC2, Valid, "", Unspecified),
    (0xAAC3, 0xAADA, Disallowed, "", Unspecified),
    (0xAADB, 0xAADD, Valid, "", Unspecified),
    (0xAADE, 0xAADF, Valid, "", Nv8),
    (0xAAE0, 0xAAEF, Valid, "", Unspecified),
    (0xAAF0, 0xAAF1, Valid, "", Nv8),
    (0xAAF2, 0xAAF6, Valid, "", Unspecified),
    (0xAAF7, 0xAB00, Disallowed, "", Unspecified),
    (0xAB01, 0xAB06, Valid, "", Unspecified),
    (0xAB07, 0xAB08, Disallowed, "", Unspecified),
    (0xAB09, 0xAB0E, Valid, "", Unspecified),
    (0xAB0F, 0xAB10, Disallowed, "", Unspecified),
    (0xAB11, 0xAB16, Valid, "", Unspecified),
    (0xAB17, 0xAB1F, Disallowed, "", Unspecified),
    (0xAB20, 0xAB26, Valid, "", Unspecified),
    (0xAB27, 0xAB27, Disallowed, "", Unspecified),
    (0xAB28, 0xAB2E, Valid, "", Unspecified),
    (0xAB2F, 0xAB2F, Disallowed, "", Unspecified),
    (0xAB30, 0xAB5A, Valid, "", Unspecified),
    (0xAB5B, 0xAB5B, Valid, "", Nv8),
    (0xAB5C, 0xAB5C, Mapped, "\u{A727}", Unspecified),
    (0xAB5D, 0xAB5D, Mapped, "\u{AB37}", Unspecified),
    (0xAB5E, 0xAB5E, Mapped, "\u{26B}", Unspecified),
    (0xAB5F, 0xAB5F, Mapped, "\u{AB52}", Unspecified),
    (0xAB60, 0xAB68, Valid, "", Unspecified),
    (0xAB69, 0xAB69, Mapped, "\u{28D}", Unspecified),
    (0xAB6A, 0xAB6B, Valid, "", Nv8),
    (0xAB6C, 0xAB6F, Disallowed, "", Unspecified),
    (0xAB70, 0xAB70, Mapped, "\u{13A0}", Unspecified),
    (0xAB71, 0xAB71, Mapped, "\u{13A1}", Unspecified),
    (0xAB72, 0xAB72, Mapped, "\u{13A2}", Unspecified),
    (0xAB73, 0xAB73, Mapped, "\u{13A3}", Unspecified),
    (0xAB74, 0xAB74, Mapped, "\u{13A4}", Unspecified),
    (0xAB75, 0xAB75, Mapped, "\u{13A5}", Unspecified),
    (0xAB76, 0xAB76, Mapped, "\u{13A6}", Unspecified),
    (0xAB77, 0xAB77, Mapped, "\u{13A7}", Unspecified),
    (0xAB78, 0xAB78, Mapped, "\u{13A8}", Unspecified),
    (0xAB79, 0xAB79, Mapped, "\u{13A9}", Unspecified),
    (0xAB7A, 0xAB7A, Mapped, "\u{13AA}", Unspecified),
    (0xAB7B, 0xAB7B, Mapped, "\u{13AB}", Unspecified),
    (0xAB7C, 0xAB7C, Mapped, "\u{13AC}", Unspecified),
    (0xAB7D, 0xAB7D, Mapped, "\u{13AD}", Unspecified),
    (0xAB7E, 0xAB7E, Mapped, "\u{13AE}", Unspecified),
    (0xAB7F, 0xAB7F, Mapped, "\u{13AF}", Unspecified),
    (0xAB80, 0xAB80, Mapped, "\u{13B0}", Unspecified),
    (0xAB81, 0xAB81, Mapped, "\u{13B1}", Unspecified),
    (0xAB82, 0xAB82, Mapped, "\u{13B2}", Unspecified),
    (0xAB83, 0xAB83, Mapped, "\u{13B3}", Unspecified),
    (0xAB84, 0xAB84, Mapped, "\u{13B4}", Unspecified),
    (0xAB85, 0xAB85, Mapped, "\u{13B5}", Unspecified),
    (0xAB86, 0xAB86, Mapped, "\u{13B6}", Unspecified),
    (0xAB87, 0xAB87, Mapped, "\u{13B7}", Unspecified),
    (0xAB88, 0xAB88, Mapped, "\u{13B8}", Unspecified),
    (0xAB89, 0xAB89, Mapped, "\u{13B9}", Unspecified),
    (0xAB8A, 0xAB8A, Mapped, "\u{13BA}", Unspecified),
    (0xAB8B, 0xAB8B, Mapped, "\u{13BB}", Unspecified),
    (0xAB8C, 0xAB8C, Mapped, "\u{13BC}", Unspecified),
    (0xAB8D, 0xAB8D, Mapped, "\u{13BD}", Unspecified),
    (0xAB8E, 0xAB8E, Mapped, "\u{13BE}", Unspecified),
    (0xAB8F, 0xAB8F, Mapped, "\u{13BF}", Unspecified),
    (0xAB90, 0xAB90, Mapped, "\u{13C0}", Unspecified),
    (0xAB91, 0xAB91, Mapped, "\u{13C1}", Unspecified),
    (0xAB92, 0xAB92, Mapped, "\u{13C2}", Unspecified),
    (0xAB93, 0xAB93, Mapped, "\u{13C3}", Unspecified),
    (0xAB94, 0xAB94, Mapped, "\u{13C4}", Unspecified),
    (0xAB95, 0xAB95, Mapped, "\u{13C5}", Unspecified),
    (0xAB96, 0xAB96, Mapped, "\u{13C6}", Unspecified),
    (0xAB97, 0xAB97, Mapped, "\u{13C7}", Unspecified),
    (0xAB98, 0xAB98, Mapped, "\u{13C8}", Unspecified),
    (0xAB99, 0xAB99, Mapped, "\u{13C9}", Unspecified),
    (0xAB9A, 0xAB9A, Mapped, "\u{13CA}", Unspecified),
    (0xAB9B, 0xAB9B, Mapped, "\u{13CB}", Unspecified),
    (0xAB9C, 0xAB9C, Mapped, "\u{13CC}", Unspecified),
    (0xAB9D, 0xAB9D, Mapped, "\u{13CD}", Unspecified),
    (0xAB9E, 0xAB9E, Mapped, "\u{13CE}", Unspecified),
    (0xAB9F, 0xAB9F, Mapped, "\u{13CF}", Unspecified),
    (0xABA0, 0xABA0, Mapped, "\u{13D0}", Unspecified),
    (0xABA1, 0xABA1, Mapped, "\u{13D1}", Unspecified),
    (0xABA2, 0xABA2, Mapped, "\u{13D2}", Unspecified),
    (0xABA3, 0xABA3, Mapped, "\u{13D3}", Unspecified),
    (0xABA4, 0xABA4, Mapped, "\u{13D4}", Unspecified),
    (0xABA5, 0xABA5, Mapped, "\u{13D5}", Unspecified),
    (0xABA6, 0xABA6, Mapped, "\u{13D6}", Unspecified),
    (0xABA7, 0xABA7, Mapped, "\u{13D7}", Unspecified),
    (0xABA8, 0xABA8, Mapped, "\u{13D8}", Unspecified),
    (0xABA9, 0xABA9, Mapped, "\u{13D9}", Unspecified),
    (0xABAA, 0xABAA, Mapped, "\u{13DA}", Unspecified),
    (0xABAB, 0xABAB, Mapped, "\u{13DB}", Unspecified),
    (0xABAC, 0xABAC, Mapped, "\u{13DC}", Unspecified),
    (0xABAD, 0xABAD, Mapped, "\u{13DD}", Unspecified),
    (0xABAE, 0xABAE, Mapped, "\u{13DE}", Unspecified),
    (0xABAF, 0xABAF, Mapped, "\u{13DF}", Unspecified),
    (0xABB0, 0xABB0, Mapped, "\u{13E0}", Unspecified),
    (0xABB1, 0xABB1, Mapped, "\u{13E1}", Unspecified),
    (0xABB2, 0xABB2, Mapped, "\u{13E2}", Unspecified),
    (0xABB3, 0xABB3, Mapped, "\u{13E3}", Unspecified),
    (0xABB4, 0xABB4, Mapped, "\u{13E4}", Unspecified),
    (0xABB5, 0xABB5, Mapped, "\u{13E5}", Unspecified),
    (0xABB6, 0xABB6, Mapped, "\u{13E6}", Unspecified),
    (0xABB7, 0xABB7, Mapped, "\u{13E7}", Unspecified),
    (0xABB8, 0xABB8, Mapped, "\u{13E8}", Unspecified),
    (0xABB9, 0xABB9, Mapped, "\u{13E9}", Unspecified),
    (0xABBA, 0xABBA, Mapped, "\u{13EA}", Unspecified),
    (0xABBB, 0xABBB, Mapped, "\u{13EB}", Unspecified),
    (0xABBC, 0xABBC, Mapped, "\u{13EC}", Unspecified),
    (0xABBD, 0xABBD, Mapped, "\u{13ED}", Unspecified),
    (0xABBE, 0xABBE, Mapped, "\u{13EE}", Unspecified),
    (0xABBF, 0xABBF, Mapped, "\u{13EF}", Unspecified),
    (0xABC0, 0xABEA, Valid, "", Unspecified),
    (0xABEB, 0xABEB, Valid, "", Nv8),
    (0xABEC, 0xABED, Valid, "", Unspecified),
    (0xABEE, 0xABEF, Disallowed, "", Unspecified),
    (0xABF0, 0xABF9, Valid, "", Unspecified),
    (0xABFA, 0xABFF, Disallowed, "", Unspecified),
    (0xAC00, 0xD7A3, Valid, "", Unspecified),
    (0xD7A4, 0xD7AF, Disallowed, "", Unspecified),
    (0xD7B0, 0xD7C6, Valid, "", Nv8),
    (0xD7C7, 0xD7CA, Disallowed, "", Unspecified),
    (0xD7CB, 0xD7FB, Valid, "", Nv8),
    (0xD7FC, 0xF8FF, Disallowed, "", Unspecified),
    (0xF900, 0xF900, Mapped, "\u{8C48}", Unspecified),
    (0xF901, 0xF901, Mapped, "\u{66F4}", Unspecified),
    (0xF902, 0xF902, Mapped, "\u{8ECA}", Unspecified),
    (0xF903, 0xF903, Mapped, "\u{8CC8}", Unspecified),
    (0xF904, 0xF904, Mapped, "\u{6ED1}", Unspecified),
    (0xF905, 0xF905, Mapped, "\u{4E32}", Unspecified),
    (0xF906, 0xF906, Mapped, "\u{53E5}", Unspecified),
    (0xF907, 0xF908, Mapped, "\u{9F9C}", Unspecified),
    (0xF909, 0xF909, Mapped, "\u{5951}", Unspecified),
    (0xF90A, 0xF90A, Mapped, "\u{91D1}", Unspecified),
    (0xF90B, 0xF90B, Mapped, "\u{5587}", Unspecified),
    (0xF90C, 0xF90C, Mapped, "\u{5948}", Unspecified),
    (0xF90D, 0xF90D, Mapped, "\u{61F6}", Unspecified),
    (0xF90E, 0xF90E, Mapped, "\u{7669}", Unspecified),
    (0xF90F, 0xF90F, Mapped, "\u{7F85}", Unspecified),
    (0xF910, 0xF910, Mapped, "\u{863F}", Unspecified),
    (0xF911, 0xF911, Mapped, "\u{87BA}", Unspecified),
    (0xF912, 0xF912, Mapped, "\u{88F8}", Unspecified),
    (0xF913, 0xF913, Mapped, "\u{908F}", Unspecified),
    (0xF914, 0xF914, Mapped, "\u{6A02}", Unspecified),
    (0xF915, 0xF915, Mapped, "\u{6D1B}", Unspecified),
    (0xF916, 0xF916, Mapped, "\u{70D9}", Unspecified),
    (0xF917, 0xF917, Mapped, "\u{73DE}", Unspecified),
    (0xF918, 0xF918, Mapped, "\u{843D}", Unspecified),
    (0xF919, 0xF919, Mapped, "\u{916A}", Unspecified),
    (0xF91A, 0xF91A, Mapped, "\u{99F1}", Unspecified),
    (0xF91B, 0xF91B, Mapped, "\u{4E82}", Unspecified),
    (0xF91C, 0xF91C, Mapped, "\u{5375}", Unspecified),
    (0xF91D, 0xF91D, Mapped, "\u{6B04}", Unspecified),
    (0xF91E, 0xF91E, Mapped, "\u{721B}", Unspecified),
    (0xF91F, 0xF91F, Mapped, "\u{862D}", Unspecified),
    (0xF920, 0xF920, Mapped, "\u{9E1E}", Unspecified),
    (0xF921, 0xF921, Mapped, "\u{5D50}", Unspecified),
    (0xF922, 0xF922, Mapped, "\u{6FEB}", Unspecified),
    (0xF923, 0xF923, Mapped, "\u{85CD}", Unspecified),
    (0xF924, 0xF924, Mapped, "\u{8964}", Unspecified),
    (0xF925, 0xF925, Mapped, "\u{62C9}", Unspecified),
    (0xF926, 0xF926, Mapped, "\u{81D8}", Unspecified),
    (0xF927, 0xF927, Mapped, "\u{881F}", Unspecified),
    (0xF928, 0xF928, Mapped, "\u{5ECA}", Unspecified),
    (0xF929, 0xF929, Mapped, "\u{6717}", Unspecified),
    (0xF92A, 0xF92A, Mapped, "\u{6D6A}", Unspecified),
    (0xF92B, 0xF92B, Mapped, "\u{72FC}", Unspecified),
    (0xF92C, 0xF92C, Mapped, "\u{90CE}", Unspecified),
    (0xF92D, 0xF92D, Mapped, "\u{4F86}", Unspecified),
    (0xF92E, 0xF92E, Mapped, "\u{51B7}", Unspecified),
    (0xF92F, 0xF92F, Mapped, "\u{52DE}", Unspecified),
    (0xF930, 0xF930, Mapped, "\u{64C4}", Unspecified),
    (0xF931, 0xF931, Mapped, "\u{6AD3}", Unspecified),
    (0xF932, 0xF932, Mapped, "\u{7210}", Unspecified),
    (0xF933, 0xF933, Mapped, "\u{76E7}", Unspecified),
    (0xF934, 0xF934, Mapped, "\u{8001}", Unspecified),
    (0xF935, 0xF935, Mapped, "\u{8606}", Unspecified),
    (0xF936, 0xF936, Mapped, "\u{865C}", Unspecified),
    (0xF937, 0xF937, Mapped, "\u{8DEF}", Unspecified),
    (0xF938, 0xF938, Mapped, "\u{9732}", Unspecified),
    (0xF939, 0xF939, Mapped, "\u{9B6F}", Unspecified),
    (0xF93A, 0xF93A, Mapped, "\u{9DFA}", Unspecified),
    (0xF93B, 0xF93B, Mapped, "\u{788C}", Unspecified),
    (0xF93C, 0xF93C, Mapped, "\u{797F}", Unspecified),
    (0xF93D, 0xF93D, Mapped, "\u{7DA0}", Unspecified),
    (0xF93E, 0xF93E, Mapped, "\u{83C9}", Unspecified),
    (0xF93F, 0xF93F, Mapped, "\u{9304}", Unspecified),
    (0xF940, 0xF940, Mapped, "\u{9E7F}", Unspecified),
    (0xF941, 0xF941, Mapped, "\u{8AD6}", Unspecified),
    (0xF942, 0xF942, Mapped, "\u{58DF}", Unspecified),
    (0xF943, 0xF943, Mapped, "\u{5F04}", Unspecified),
    (0xF944, 0xF944, Mapped, "\u{7C60}", Unspecified),
    (0xF945, 0xF945, Mapped, "\u{807E}", Unspecified),
    (0xF946, 0xF946, Mapped, "\u{7262}", Unspecified),
    (0xF947, 0xF947, Mapped, "\u{78CA}", Unspecified),
    (0xF948, 0xF948, Mapped, "\u{8CC2}", Unspecified),
    (0xF949, 0xF949, Mapped, "\u{96F7}", Unspecified),
    (0xF94A, 0xF94A, Mapped, "\u{58D8}", Unspecified),
    (0xF94B, 0xF94B, Mapped, "\u{5C62}", Unspecified),
    (0xF94C, 0xF94C, Mapped, "\u{6A13}", Unspecified),
    (0xF94D, 0xF94D, Mapped, "\u{6DDA}", Unspecified),
    (0xF94E, 0xF94E, Mapped, "\u{6F0F}", Unspecified),
    (0xF94F, 0xF94F, Mapped, "\u{7D2F}", Unspecified),
    (0xF950, 0xF950, Mapped, "\u{7E37}", Unspecified),
    (0xF951, 0xF951, Mapped, "\u{964B}", Unspecified),
    (0xF952, 0xF952, Mapped, "\u{52D2}", Unspecified),
    (0xF953, 0xF953, Mapped, "\u{808B}", Unspecified),
    (0xF954, 0xF954, Mapped, "\u{51DC}", Unspecified),
    (0xF955, 0xF955, Mapped, "\u{51CC}", Unspecified),
    (0xF956, 0xF956, Mapped, "\u{7A1C}", Unspecified),
    (0xF957, 0xF957, Mapped, "\u{7DBE}", Unspecified),
    (0xF958, 0xF958, Mapped, "\u{83F1}", Unspecified),
    (0xF959, 0xF959, Mapped, "\u{9675}", Unspecified),
    (0xF95A, 0xF95A, Mapped, "\u{8B80}", Unspecified),
    (0xF95B, 0xF95B, Mapped, "\u{62CF}", Unspecified),
    (0xF95C, 0xF95C, Mapped, "\u{6A02}", Unspecified),
    (0xF95D, 0xF95D, Mapped, "\u{8AFE}", Unspecified),
    (0xF95E, 0xF95E, Mapped, "\u{4E39}", Unspecified),
    (0xF95F, 0xF95F, Mapped, "\u{5BE7}", Unspecified),
    (0xF960, 0xF960, Mapped, "\u{6012}", Unspecified),
    (0xF961, 0xF961, Mapped, "\u{7387}", Unspecified),
    (0xF962, 0xF962, Mapped, "\u{7570}", Unspecified),
    (0xF963, 0xF963, Mapped, "\u{5317}", Unspecified),
    (0xF964, 0xF964, Mapped, "\u{78FB}", Unspecified),
    (0xF965, 0xF965, Mapped, "\u{4FBF}", Unspecified),
    (0xF966, 0xF966, Mapped, "\u{5FA9}", Unspecified),
    (0xF967, 0xF967, Mapped, "\u{4E0D}", Unspecified),
    (0xF968, 0xF968, Mapped, "\u{6CCC}", Unspecified),
    (0xF969, 0xF969, Mapped, "\u{6578}", Unspecified),
    (0xF96A, 0xF96A, Mapped, "\u{7D22}", Unspecified),
    (0xF96B, 0xF96B, Mapped, "\u{53C3}", Unspecified),
    (0xF96C, 0xF96C, Mapped, "\u{585E}", Unspecified),
    (0xF96D, 0xF96D, Mapped, "\u{7701}", Unspecified),
    (0xF96E, 0xF96E, Mapped, "\u{8449}", Unspecified),
    (0xF96F, 0xF96F, Mapped, "\u{8AAA}", Unspecified),
    (0xF970, 0xF970, Mapped, "\u{6BBA}", Unspecified),
    (0xF971, 0xF971, Mapped, "\u{8FB0}", Unspecified),
    (0xF972, 0xF972, Mapped, "\u{6C88}", Unspecified),
    (0xF973, 0xF973, Mapped, "\u{62FE}", Unspecified),
    (0xF974, 0xF974, Mapped, "\u{82E5}", Unspecified),
    (0xF975, 0xF975, Mapped, "\u{63A0}", Unspecified),
    (0xF976, 0xF976, Mapped, "\u{7565}", Unspecified),
    (0xF977, 0xF977, Mapped, "\u{4EAE}", Unspecified),
    (0xF978, 0xF978, Mapped, "\u{5169}", Unspecified),
    (0xF979, 0xF979, Mapped, "\u{51C9}", Unspecified),
    (0xF97A, 0xF97A, Mapped, "\u{6881}", Unspecified),
    (0xF97B, 0xF97B, Mapped, "\u{7CE7}", Unspecified),
    (0xF97C, 0xF97C, Mapped, "\u{826F}", Unspecified),
    (0xF97D, 0xF97D, Mapped, "\u{8AD2}", Unspecified),
    (0xF97E, 0xF97E, Mapped, "\u{91CF}", Unspecified),
    (0xF97F, 0xF97F, Mapped, "\u{52F5}", Unspecified),
    (0xF980, 0xF980, Mapped, "\u{5442}", Unspecified),
    (0xF981, 0xF981, Mapped, "\u{5973}", Unspecified),
    (0xF982, 0xF982, Mapped, "\u{5EEC}", Unspecified),
    (0xF983, 0xF983, Mapped, "\u{65C5}", Unspecified),
    (0xF984, 0xF984, Mapped, "\u{6FFE}", Unspecified),
    (0xF985, 0xF985, Mapped, "\u{792A}", Unspecified),
    (0xF986, 0xF986, Mapped, "\u{95AD}", Unspecified),
    (0xF987, 0xF987, Mapped, "\u{9A6A}", Unspecified),
    (0xF988, 0xF988, Mapped, "\u{9E97}", Unspecified),
    (0xF989, 0xF989, Mapped, "\u{9ECE}", Unspecified),
    (0xF98A, 0xF98A, Mapped, "\u{529B}", Unspecified),
    (0xF98B, 0xF98B, Mapped, "\u{66C6}", Unspecified),
    (0xF98C, 0xF98C, Mapped, "\u{6B77}", Unspecified),
    (0xF98D, 0xF98D, Mapped, "\u{8F62}", Unspecified),
    (0xF98E, 0xF98E, Mapped, "\u{5E74}", Unspecified),
    (0xF98F, 0xF98F, Mapped, "\u{6190}", Unspecified),
    (0xF990, 0xF990, Mapped, "\u{6200}", Unspecified),
    (0xF991, 0xF991, Mapped, "\u{649A}", Unspecified),
    (0xF992, 0xF992, Mapped, "\u{6F23}", Unspecified),
    (0xF993, 0xF993, Mapped, "\u{7149}", Unspecified),
    (0xF994, 0xF994, Mapped, "\u{7489}", Unspecified),
    (0xF995, 0xF995, Mapped, "\u{79CA}", Unspecified),
    (0xF996, 0xF996, Mapped, "\u{7DF4}", Unspecified),
    (0xF997, 0xF997, Mapped, "\u{806F}", Unspecified),
    (0xF998, 0xF998, Mapped, "\u{8F26}", Unspecified),
    (0xF999, 0xF999, Mapped, "\u{84EE}", Unspecified),
    (0xF99A, 0xF99A, Mapped, "\u{9023}", Unspecified),
    (0xF99B, 0xF99B, Mapped, "\u{934A}", Unspecified),
    (0xF99C, 0xF99C, Mapped, "\u{5217}", Unspecified),
    (0xF99D, 0xF99D, Mapped, "\u{52A3}", Unspecified),
    (0xF99E, 0xF99E, Mapped, "\u{54BD}", Unspecified),
    (0xF99F, 0xF99F, Mapped, "\u{70C8}", Unspecified),
    (0xF9A0, 0xF9A0, Mapped, "\u{88C2}", Unspecified),
    (0xF9A1, 0xF9A1, Mapped, "\u{8AAA}", Unspecified),
    (0xF9A2, 0xF9A2, Mapped, "\u{5EC9}", Unspecified),
    (0xF9A3, 0xF9A3, Mapped, "\u{5FF5}", Unspecified),
    (0xF9A4, 0xF9A4, Mapped, "\u{637B}", Unspecified),
    (0xF9A5, 0xF9A5, Mapped, "\u{6BAE}", Unspecified),
    (0xF9A6, 0xF9A6, Mapped, "\u{7C3E}", Unspecified),
    (0xF9A7, 0xF9A7, Mapped, "\u{7375}", Unspecified),
    (0xF9A8, 0xF9A8, Mapped, "\u{4EE4}", Unspecified),
    (0xF9A9, 0xF9A9, Mapped, "\u{56F9}", Unspecified),
    (0xF9AA, 0xF9AA, Mapped, "\u{5BE7}", Unspecified),
    (0xF9AB, 0xF9AB, Mapped, "\u{5DBA}", Unspecified),
    (0xF9AC, 0xF9AC, Mapped, "\u{601C}", Unspecified),
    (0xF9AD, 0xF9AD, Mapped, "\u{73B2}", Unspecified),
    (0xF9AE, 0xF9AE, Mapped, "\u{7469}", Unspecified),
    (0xF9AF, 0xF9AF, Mapped, "\u{7F9A}", Unspecified),
    (0xF9B0, 0xF9B0, Mapped, "\u{8046}", Unspecified),
    (0xF9B1, 0xF9B1, Mapped, "\u{9234}", Unspecified),
    (0xF9B2, 0xF9B2, Mapped, "\u{96F6}", Unspecified),
    (0xF9B3, 0xF9B3, Mapped, "\u{9748}", Unspecified),
    (0xF9B4, 0xF9B4, Mapped, "\u{9818}", Unspecified),
    (0xF9B5, 0xF9B5, Mapped, "\u{4F8B}", Unspecified),
    (0xF9B6, 0xF9B6, Mapped, "\u{79AE}", Unspecified),
    (0xF9B7, 0xF9B7, Mapped, "\u{91B4}", Unspecified),
    (0xF9B8, 0xF9B8, Mapped, "\u{96B8}", Unspecified),
    (0xF9B9, 0xF9B9, Mapped, "\u{60E1}", Unspecified),
    (0xF9BA, 0xF9BA, Mapped, "\u{4E86}", Unspecified),
    (0xF9BB, 0xF9BB, Mapped, "\u{50DA}", Unspecified),
    (0xF9BC, 0xF9BC, Mapped, "\u{5BEE}", Unspecified),
    (0xF9BD, 0xF9BD, Mapped, "\u{5C3F}", Unspecified),
    (0xF9BE, 0xF9BE, Mapped, "\u{6599}", Unspecified),
    (0xF9BF, 0xF9BF, Mapped, "\u{6A02}", Unspecified),
    (0xF9C0, 0xF9C0, Mapped, "\u{71CE}", Unspecified),
    (0xF9C1, 0xF9C1, Mapped, "\u{7642}", Unspecified),
    (0xF9C2, 0xF9C2, Mapped, "\u{84FC}", Unspecified),
    (0xF9C3, 0xF9C3, Mapped, "\u{907C}", Unspecified),
    (0xF9C4, 0xF9C4, Mapped, "\u{9F8D}", Unspecified),
    (0xF9C5, 0xF9C5, Mapped, "\u{6688}", Unspecified),
    (0xF9C6, 0xF9C6, Mapped, "\u{962E}", Unspecified),
    (0xF9C7, 0xF9C7, Mapped, "\u{5289}", Unspecified),
    (0xF9C8, 0xF9C8, Mapped, "\u{677B}", Unspecified),
    (0xF9C9, 0xF9C9, Mapped, "\u{67F3}", Unspecified),
    (0xF9CA, 0xF9CA, Mapped, "\u{6D41}", Unspecified),
    (0xF9CB, 0xF9CB, Mapped, "\u{6E9C}", Unspecified),
    (0xF9CC, 0xF9CC, Mapped, "\u{7409}", Unspecified),
    (0xF9CD, 0xF9CD, Mapped, "\u{7559}", Unspecified),
    (0xF9CE, 0xF9CE, Mapped, "\u{786B}", Unspecified),
    (0xF9CF, 0xF9CF, Mapped, "\u{7D10}", Unspecified),
    (0xF9D0, 0xF9D0, Mapped, "\u{985E}", Unspecified),
    (0xF9D1, 0xF9D1, Mapped, "\u{516D}", Unspecified),
    (0xF9D2, 0xF9D2, Mapped, "\u{622E}", Unspecified),
    (0xF9D3, 0xF9D3, Mapped, "\u{9678}", Unspecified),
    (0xF9D4, 0xF9D4, Mapped, "\u{502B}", Unspecified),
    (0xF9D5, 0xF9D5, Mapped, "\u{5D19}", Unspecified),
    (0xF9D6, 0xF9D6, Mapped, "\u{6DEA}", Unspecified),
    (0xF9D7, 0xF9D7, Mapped, "\u{8F2A}", Unspecified),
    (0xF9D8, 0xF9D8, Mapped, "\u{5F8B}", Unspecified),
    (0xF9D9, 0xF9D9, Mapped, "\u{6144}", Unspecified),
    (0xF9DA, 0xF9DA, Mapped, "\u{6817}", Unspecified),
    (0xF9DB, 0xF9DB, Mapped, "\u{7387}", Unspecified),
    (0xF9DC, 0xF9DC, Mapped, "\u{9686}", Unspecified),
    (0xF9DD, 0xF9DD, Mapped, "\u{5229}", Unspecified),
    (0xF9DE, 0xF9DE, Mapped, "\u{540F}", Unspecified),
    (0xF9DF, 0xF9DF, Mapped, "\u{5C65}", Unspecified),
    (0xF9E0, 0xF9E0, Mapped, "\u{6613}", Unspecified),
    (0xF9E1, 0xF9E1, Mapped, "\u{674E}", Unspecified),
    (0xF9E2, 0xF9E2, Mapped, "\u{68A8}", Unspecified),
    (0xF9E3, 0xF9E3, Mapped, "\u{6CE5}", Unspecified),
    (0xF9E4, 0xF9E4, Mapped, "\u{7406}", Unspecified),
    (0xF9E5, 0xF9E5, Mapped, "\u{75E2}", Unspecified),
    (0xF9E6, 0xF9E6, Mapped, "\u{7F79}", Unspecified),
    (0xF9E7, 0xF9E7, Mapped, "\u{88CF}", Unspecified),
    (0xF9E8, 0xF9E8, Mapped, "\u{88E1}", Unspecified),
    (0xF9E9, 0xF9E9, Mapped, "\u{91CC}", Unspecified),
    (0xF9EA, 0xF9EA, Mapped, "\u{96E2}", Unspecified),
    (0xF9EB, 0xF9EB, Mapped, "\u{533F}", Unspecified),
    (0xF9EC, 0xF9EC, Mapped, "\u{6EBA}", Unspecified),
    (0xF9ED, 0xF9ED, Mapped, "\u{541D}", Unspecified),
    (0xF9EE, 0xF9EE, Mapped, "\u{71D0}", Unspecified),
    (0xF9EF, 0xF9EF, Mapped, "\u{7498}", Unspecified),
    (0xF9F0, 0xF9F0, Mapped, "\u{85FA}", Unspecified),
    (0xF9F1, 0xF9F1, Mapped, "\u{96A3}", Unspecified),
    (0xF9F2, 0xF9F2, Mapped, "\u{9C57}", Unspecified),
    (0xF9F3, 0xF9F3, Mapped, "\u{9E9F}", Unspecified),
    (0xF9F4, 0xF9F4, Mapped, "\u{6797}", Unspecified),
    (0xF9F5, 0xF9F5, Mapped, "\u{6DCB}", Unspecified),
    (0xF9F6, 0xF9F6, Mapped, "\u{81E8}", Unspecified),
    (0xF9F7, 0xF9F7, Mapped, "\u{7ACB}", Unspecified),
    (0xF9F8, 0xF9F8, Mapped, "\u{7B20}", Unspecified),
    (0xF9F9, 0xF9F9, Mapped, "\u{7C92}", Unspecified),
    (0xF9FA, 0xF9FA, Mapped, "\u{72C0}", Unspecified),
    (0xF9FB, 0xF9FB, Mapped, "\u{7099}", Unspecified),
    (0xF9FC, 0xF9FC, Mapped, "\u{8B58}", Unspecified),
    (0xF9FD, 0xF9FD, Mapped, "\u{4EC0}", Unspecified),
    (0xF9FE, 0xF9FE, Mapped, "\u{8336}", Unspecified),
    (0xF9FF, 0xF9FF, Mapped, "\u{523A}", Unspecified),
    (0xFA00, 0xFA00, Mapped, "\u{5207}", Unspecified),
    (0xFA01, 0xFA01, Mapped, "\u{5EA6}", Unspecified),
    (0xFA02, 0xFA02, Mapped, "\u{62D3}", Unspecified),
    (0xFA03, 0xFA03, Mapped, "\u{7CD6}", Unspecified),
    (0xFA04, 0xFA04, Mapped, "\u{5B85}", Unspecified),
    (0xFA05, 0xFA05, Mapped, "\u{6D1E}", Unspecified),
    (0xFA06, 0xFA06, Mapped, "\u{66B4}", Unspecified),
    (0xFA07, 0xFA07, Mapped, "\u{8F3B}", Unspecified),
    (0xFA08, 0xFA08, Mapped, "\u{884C}", Unspecified),
    (0xFA09, 0xFA09, Mapped, "\u{964D}", Unspecified),
    (0xFA0A, 0xFA0A, Mapped, "\u{898B}", Unspecified),
    (0xFA0B, 0xFA0B, Mapped, "\u{5ED3}", Unspecified),
    (0xFA0C, 0xFA0C, Mapped, "\u{5140}", Unspecified),
    (0xFA0D, 0xFA0D, Mapped, "\u{55C0}", Unspecified),
    (0xFA0E, 0xFA0F, Valid, "", Unspecified),
    (0xFA10, 0xFA10, Mapped, "\u{585A}", Unspecified),
    (0xFA11, 0xFA11, Valid, "", Unspecified),
    (0xFA12, 0xFA12, Mapped, "\u{6674}", Unspecified),
    (0xFA13, 0xFA14, Valid, "", Unspecified),
    (0xFA15, 0xFA15, Mapped, "\u{51DE}", Unspecified),
    (0xFA16, 0xFA16, Mapped, "\u{732A}", Unspecified),
    (0xFA17, 0xFA17, Mapped, "\u{76CA}", Unspecified),
    (0xFA18, 0xFA18, Mapped, "\u{793C}", Unspecified),
    (0xFA19, 0xFA19, Mapped, "\u{795E}", Unspecified),
    (0xFA1A, 0xFA1A, Mapped, "\u{7965}", Unspecified),
    (0xFA1B, 0xFA1B, Mapped, "\u{798F}", Unspecified),
    (0xFA1C, 0xFA1C, Mapped, "\u{9756}", Unspecified),
    (0xFA1D, 0xFA1D, Mapped, "\u{7CBE}", Unspecified),
    (0xFA1E, 0xFA1E, Mapped, "\u{7FBD}", Unspecified),
    (0xFA1F, 0xFA1F, Valid, "", Unspecified),
    (0xFA20, 0xFA20, Mapped, "\u{8612}", Unspecified),
    (0xFA21, 0xFA21, Valid, "", Unspecified),
    (0xFA22, 0xFA22, Mapped, "\u{8AF8}", Unspecified),
    (0xFA23, 0xFA24, Valid, "", Unspecified),
    (0xFA25, 0xFA25, Mapped, "\u{9038}", Unspecified),
    (0xFA26, 0xFA26, Mapped, "\u{90FD}", Unspecified),
    (0xFA27, 0xFA29, Valid, "", Unspecified),
    (0xFA2A, 0xFA2A, Mapped, "\u{98EF}", Unspecified),
    (0xFA2B, 0xFA2B, Mapped, "\u{98FC}", Unspecified),
    (0xFA2C, 0xFA2C, Mapped, "\u{9928}", Unspecified),
    (0xFA2D, 0xFA2D, Mapped, "\u{9DB4}", Unspecified),
    (0xFA2E, 0xFA2E, Mapped, "\u{90DE}", Unspecified),
    (0xFA2F, 0xFA2F, Mapped, "\u{96B7}", Unspecified),
    (0xFA30, 0xFA30, Mapped, "\u{4FAE}", Unspecified),
    (0xFA31, 0xFA31, Mapped, "\u{50E7}", Unspecified),
    (0xFA32, 0xFA32, Mapped, "\u{514D}", Unspecified),
    (0xFA33, 0xFA33, Mapped, "\u{52C9}", Unspecified),
    (0xFA34, 0xFA34, Mapped, "\u{52E4}", Unspecified),
    (0xFA35, 0xFA35, Mapped, "\u{5351}", Unspecified),
    (0xFA36, 0xFA36, Mapped, "\u{559D}", Unspecified),
    (0xFA37, 0xFA37, Mapped, "\u{5606}", Unspecified),
    (0xFA38, 0xFA38, Mapped, "\u{5668}", Unspecified),
    (0xFA39, 0xFA39, Mapped, "\u{5840}", Unspecified),
    (0xFA3A, 0xFA3A, Mapped, "\u{58A8}", Unspecified),
    (0xFA3B, 0xFA3B, Mapped, "\u{5C64}", Unspecified),
    (0xFA3C, 0xFA3C, Mapped, "\u{5C6E}", Unspecified),
    (0xFA3D, 0xFA3D, Mapped, "\u{6094}", Unspecified),
    (0xFA3E, 0xFA3E, Mapped, "\u{6168}", Unspecified),
    (0xFA3F, 0xFA3F, Mapped, "\u{618E}", Unspecified),
    (0xFA40, 0xFA40, Mapped, "\u{61F2}", Unspecified),
    (0xFA41, 0xFA41, Mapped, "\u{654F}", Unspecified),
    (0xFA42, 0xFA42, Mapped, "\u{65E2}", Unspecified),
    (0xFA43, 0xFA43, Mapped, "\u{6691}", Unspecified),
    (0xFA44, 0xFA44, Mapped, "\u{6885}", Unspecified),
    (0xFA45, 0xFA45, Mapped, "\u{6D77}", Unspecified),
    (0xFA46, 0xFA46, Mapped, "\u{6E1A}", Unspecified),
    (0xFA47, 0xFA47, Mapped, "\u{6F22}", Unspecified),
    (0xFA48, 0xFA48, Mapped, "\u{716E}", Unspecified),
    (0xFA49, 0xFA49, Mapped, "\u{722B}", Unspecified),
    (0xFA4A, 0xFA4A, Mapped, "\u{7422}", Unspecified),
    (0xFA4B, 0xFA4B, Mapped, "\u{7891}", Unspecified),
    (0xFA4C, 0xFA4C, Mapped, "\u{793E}", Unspecified),
    (0xFA4D, 0xFA4D, Mapped, "\u{7949}", Unspecified),
    (0xFA4E, 0xFA4E, Mapped, "\u{7948}", Unspecified),
    (0xFA4F, 0xFA4F, Mapped, "\u{7950}", Unspecified),
    (0xFA50, 0xFA50, Mapped, "\u{7956}", Unspecified),
    (0xFA51, 0xFA51, Mapped, "\u{795D}", Unspecified),
    (0xFA52, 0xFA52, Mapped, "\u{798D}", Unspecified),
    (0xFA53, 0xFA53, Mapped, "\u{798E}", Unspecified),
    (0xFA54, 0xFA54, Mapped, "\u{7A40}", Unspecified),
    (0xFA55, 0xFA55, Mapped, "\u{7A81}", Unspecified),
    (0xFA56, 0xFA56, Mapped, "\u{7BC0}", Unspecified),
    (0xFA57, 0xFA57, Mapped, "\u{7DF4}", Unspecified),
    (0xFA58, 0xFA58, Mapped, "\u{7E09}", Unspecified),
    (0xFA59, 0xFA59, Mapped, "\u{7E41}", Unspecified),
    (0xFA5A, 0xFA5A, Mapped, "\u{7F72}", Unspecified),
    (0xFA5B, 0xFA5B, Mapped, "\u{8005}", Unspecified),
    (0xFA5C, 0xFA5C, Mapped, "\u{81ED}", Unspecified),
    (0xFA5D, 0xFA5E, Mapped, "\u{8279}", Unspecified),
    (0xFA5F, 0xFA5F, Mapped, "\u{8457}", Unspecified),
    (0xFA60, 0xFA60, Mapped, "\u{8910}", Unspecified),
    (0xFA61, 0xFA61, Mapped, "\u{8996}", Unspecified),
    (0xFA62, 0xFA62, Mapped, "\u{8B01}", Unspecified),
    (0xFA63, 0xFA63, Mapped, "\u{8B39}", Unspecified),
    (0xFA64, 0xFA64, Mapped, "\u{8CD3}", Unspecified),
    (0xFA65, 0xFA65, Mapped, "\u{8D08}", Unspecified),
    (0xFA66, 0xFA66, Mapped, "\u{8FB6}", Unspecified),
    (0xFA67, 0xFA67, Mapped, "\u{9038}", Unspecified),
    (0xFA68, 0xFA68, Mapped, "\u{96E3}", Unspecified),
    (0xFA69, 0xFA69, Mapped, "\u{97FF}", Unspecified),
    (0xFA6A, 0xFA6A, Mapped, "\u{983B}", Unspecified),
    (0xFA6B, 0xFA6B, Mapped, "\u{6075}", Unspecified),
    (0xFA6C, 0xFA6C, Mapped, "\u{242EE}", Unspecified),
    (0xFA6D, 0xFA6D, Mapped, "\u{8218}", Unspecified),
    (0xFA6E, 0xFA6F, Disallowed, "", Unspecified),
    (0xFA70, 0xFA70, Mapped, "\u{4E26}", Unspecified),
    (0xFA71, 0xFA71, Mapped, "\u{51B5}", Unspecified),
    (0xFA72, 0xFA72, Mapped, "\u{5168}", Unspecified),
    (0xFA73, 0xFA73, Mapped, "\u{4F80}", Unspecified),
    (0xFA74, 0xFA74, Mapped, "\u{5145}", Unspecified),
    (0xFA75, 0xFA75, Mapped, "\u{5180}", Unspecified),
    (0xFA76, 0xFA76, Mapped, "\u{52C7}", Unspecified),
    (0xFA77, 0xFA77, Mapped, "\u{52FA}", Unspecified),
    (0xFA78, 0xFA78, Mapped, "\u{559D}", Unspecified),
    (0xFA79, 0xFA79, Mapped, "\u{5555}", Unspecified),
    (0xFA7A, 0xFA7A, Mapped, "\u{5599}", Unspecified),
    (0xFA7B, 0xFA7B, Mapped, "\u{55E2}", Unspecified),
    (0xFA7C, 0xFA7C, Mapped, "\u{585A}", Unspecified),
    (0xFA7D, 0xFA7D, Mapped, "\u{58B3}", Unspecified),
    (0xFA7E, 0xFA7E, Mapped, "\u{5944}", Unspecified),
    (0xFA7F, 0xFA7F, Mapped, "\u{5954}", Unspecified),
    (0xFA80, 0xFA80, Mapped, "\u{5A62}", Unspecified),
    (0xFA81, 0xFA81, Mapped, "\u{5B28}", Unspecified),
    (0xFA82, 0xFA82, Mapped, "\u{5ED2}", Unspecified),
    (0xFA83, 0xFA83, Mapped, "\u{5ED9}", Unspecified),
    (0xFA84, 0xFA84, Mapped, "\u{5F69}", Unspecified),
    (0xFA85, 0xFA85, Mapped, "\u{5FAD}", Unspecified),
    (0xFA86, 0xFA86, Mapped, "\u{60D8}", Unspecified),
    (0xFA87, 0xFA87, Mapped, "\u{614E}", Unspecified),
    (0xFA88, 0xFA88, Mapped, "\u{6108}", Unspecified),
    (0xFA89, 0xFA89, Mapped, "\u{618E}", Unspecified),
    (0xFA8A, 0xFA8A, Mapped, "\u{6160}", Unspecified),
    (0xFA8B, 0xFA8B, Mapped, "\u{61F2}", Unspecified),
    (0xFA8C, 0xFA8C, Mapped, "\u{6234}", Unspecified),
    (0xFA8D, 0xFA8D, Mapped, "\u{63C4}", Unspecified),
    (0xFA8E, 0xFA8E, Mapped, "\u{641C}", Unspecified),
    (0xFA8F, 0xFA8F, Mapped, "\u{6452}", Unspecified),
    (0xFA90, 0xFA90, Mapped, "\u{6556}", Unspecified),
    (0xFA91, 0xFA91, Mapped, "\u{6674}", Unspecified),
    (0xFA92, 0xFA92, Mapped, "\u{6717}", Unspecified),
    (0xFA93, 0xFA93, Mapped, "\u{671B}", Unspecified),
    (0xFA94, 0xFA94, Mapped, "\u{6756}", Unspecified),
    (0xFA95, 0xFA95, Mapped, "\u{6B79}", Unspecified),
    (0xFA96, 0xFA96, Mapped, "\u{6BBA}", Unspecified),
    (0xFA97, 0xFA97, Mapped, "\u{6D41}", Unspecified),
    (0xFA98, 0xFA98, Mapped, "\u{6EDB}", Unspecified),
    (0xFA99, 0xFA99, Mapped, "\u{6ECB}", Unspecified),
    (0xFA9A, 0xFA9A, Mapped, "\u{6F22}", Unspecified),
    (0xFA9B, 0xFA9B, Mapped, "\u{701E}", Unspecified),
    (0xFA9C, 0xFA9C, Mapped, "\u{716E}", Unspecified),
    (0xFA9D, 0xFA9D, Mapped, "\u{77A7}", Unspecified),
    (0xFA9E, 0xFA9E, Mapped, "\u{7235}", Unspecified),
    (0xFA9F, 0xFA9F, Mapped, "\u{72AF}", Unspecified),
    (0xFAA0, 0xFAA0, Mapped, "\u{732A}", Unspecified),
    (0xFAA1, 0xFAA1, Mapped, "\u{7471}", Unspecified),
    (0xFAA2, 0xFAA2, Mapped, "\u{7506}", Unspecified),
    (0xFAA3, 0xFAA3, Mapped, "\u{753B}", Unspecified),
    (0xFAA4, 0xFAA4, Mapped, "\u{761D}", Unspecified),
    (0xFAA5, 0xFAA5, Mapped, "\u{761F}", Unspecified),
    (0xFAA6, 0xFAA6, Mapped, "\u{76CA}", Unspecified),
    (0xFAA7, 0xFAA7, Mapped, "\u{76DB}", Unspecified),
    (0xFAA8, 0xFAA8, Mapped, "\u{76F4}", Unspecified),
    (0xFAA9, 0xFAA9, Mapped, "\u{774A}", Unspecified),
    (0xFAAA, 0xFAAA, Mapped, "\u{7740}", Unspecified),
    (0xFAAB, 0xFAAB, Mapped, "\u{78CC}", Unspecified),
    (0xFAAC, 0xFAAC, Mapped, "\u{7AB1}", Unspecified),
    (0xFAAD, 0xFAAD, Mapped, "\u{7BC0}", Unspecified),
    (0xFAAE, 0xFAAE, Mapped, "\u{7C7B}", Unspecified),
    (0xFAAF, 0xFAAF, Mapped, "\u{7D5B}", Unspecified),
    (0xFAB0, 0xFAB0, Mapped, "\u{7DF4}", Unspecified),
    (0xFAB1, 0xFAB1, Mapped, "\u{7F3E}", Unspecified),
    (0xFAB2, 0xFAB2, Mapped, "\u{8005}", Unspecified),
    (0xFAB3, 0xFAB3, Mapped, "\u{8352}", Unspecified),
    (0xFAB4, 0xFAB4, Mapped, "\u{83EF}", Unspecified),
    (0xFAB5, 0xFAB5, Mapped, "\u{8779}", Unspecified),
    (0xFAB6, 0xFAB6, Mapped, "\u{8941}", Unspecified),
    (0xFAB7, 0xFAB7, Mapped, "\u{8986}", Unspecified),
    (0xFAB8, 0xFAB8, Mapped, "\u{8996}", Unspecified),
    (0xFAB9, 0xFAB9, Mapped, "\u{8ABF}", Unspecified),
    (0xFABA, 0xFABA, Mapped, "\u{8AF8}", Unspecified),
    (0xFABB, 0xFABB, Mapped, "\u{8ACB}", Unspecified),
    (0xFABC, 0xFABC, Mapped, "\u{8B01}", Unspecified),
    (0xFABD, 0xFABD, Mapped, "\u{8AFE}", Unspecified),
    (0xFABE, 0xFABE, Mapped, "\u{8AED}", Unspecified),
    (0xFABF, 0xFABF, Mapped, "\u{8B39}", Unspecified),
    (0xFAC0, 0xFAC0, Mapped, "\u{8B8A}", Unspecified),
    (0xFAC1, 0xFAC1, Mapped, "\u{8D08}", Unspecified),
    (0xFAC2, 0xFAC2, Mapped, "\u{8F38}", Unspecified),
    (0xFAC3, 0xFAC3, Mapped, "\u{9072}", Unspecified),
    (0xFAC4, 0xFAC4, Mapped, "\u{9199}", Unspecified),
    (0xFAC5, 0xFAC5, Mapped, "\u{9276}", Unspecified),
    (0xFAC6, 0xFAC6, Mapped, "\u{967C}", Unspecified),
    (0xFAC7, 0xFAC7, Mapped, "\u{96E3}", Unspecified),
    (0xFAC8, 0xFAC8, Mapped, "\u{9756}", Unspecified),
    (0xFAC9, 0xFAC9, Mapped, "\u{97DB}", Unspecified),
    (0xFACA, 0xFACA, Mapped, "\u{97FF}", Unspecified),
    (0xFACB, 0xFACB, Mapped, "\u{980B}", Unspecified),
    (0xFACC, 0xFACC, Mapped, "\u{983B}", Unspecified),
    (0xFACD, 0xFACD, Mapped, "\u{9B12}", Unspecified),
    (0xFACE, 0xFACE, Mapped, "\u{9F9C}", Unspecified),
    (0xFACF, 0xFACF, Mapped, "\u{2284A}", Unspecified),
    (0xFAD0, 0xFAD0, Mapped, "\u{22844}", Unspecified),
    (0xFAD1, 0xFAD1, Mapped, "\u{233D5}", Unspecified),
    (0xFAD2, 0xFAD2, Mapped, "\u{3B9D}", Unspecified),
    (0xFAD3, 0xFAD3, Mapped, "\u{4018}", Unspecified),
    (0xFAD4, 0xFAD4, Mapped, "\u{4039}", Unspecified),
    (0xFAD5, 0xFAD5, Mapped, "\u{25249}", Unspecified),
    (0xFAD6, 0xFAD6, Mapped, "\u{25CD0}", Unspecified),
    (0xFAD7, 0xFAD7, Mapped, "\u{27ED3}", Unspecified),
    (0xFAD8, 0xFAD8, Mapped, "\u{9F43}", Unspecified),
    (0xFAD9, 0xFAD9, Mapped, "\u{9F8E}", Unspecified),
    (0xFADA, 0xFAFF, Disallowed, "", Unspecified),
    (0xFB00, 0xFB00, Mapped, "ff", Unspecified),
    (0xFB01, 0xFB01, Mapped, "fi", Unspecified),
    (0xFB02, 0xFB02, Mapped, "fl", Unspecified),
    (0xFB03, 0xFB03, Mapped, "ffi", Unspecified),
    (0xFB04, 0xFB04, Mapped, "ffl", Unspecified),
    (0xFB05, 0xFB06, Mapped, "st", Unspecified),
    (0xFB07, 0xFB12, Disallowed, "", Unspecified),
    (0xFB13, 0xFB13, Mapped, "\u{574}\u{576}", Unspecified),
    (0xFB14, 0xFB14, Mapped, "\u{574}\u{565}", Unspecified),
    (0xFB15, 0xFB15, Mapped, "\u{574}\u{56B}", Unspecified),
    (0xFB16, 0xFB16, Mapped, "\u{57E}\u{576}", Unspecified),
    (0xFB17, 0xFB17, Mapped, "\u{574}\u{56D}", Unspecified),
    (0xFB18, 0xFB1C, Disallowed, "", Unspecified),
    (0xFB1D, 0xFB1D, Mapped, "\u{5D9}\u{5B4}", Unspecified),
    (0xFB1E, 0xFB1E, Valid, "", Unspecified),
    (0xFB1F, 0xFB1F, Mapped, "\u{5F2}\u{5B7}", Unspecified),
    (0xFB20, 0xFB20, Mapped, "\u{5E2}", Unspecified),
    (0xFB21, 0xFB21, Mapped, "\u{5D0}", Unspecified),
    (0xFB22, 0xFB22, Mapped, "\u{5D3}", Unspecified),
    (0xFB23, 0xFB23, Mapped, "\u{5D4}", Unspecified),
    (0xFB24, 0xFB24, Mapped, "\u{5DB}", Unspecified),
    (0xFB25, 0xFB25, Mapped, "\u{5DC}", Unspecified),
    (0xFB26, 0xFB26, Mapped, "\u{5DD}", Unspecified),
    (0xFB27, 0xFB27, Mapped, "\u{5E8}", Unspecified),
    (0xFB28, 0xFB28, Mapped, "\u{5EA}", Unspecified),
    (0xFB29, 0xFB29, DisallowedStd3Mapped, "+", Unspecified),
    (0xFB2A, 0xFB2A, Mapped, "\u{5E9}\u{5C1}", Unspecified),
    (0xFB2B, 0xFB2B, Mapped, "\u{5E9}\u{5C2}", Unspecified),
    (0xFB2C, 0xFB2C, Mapped, "\u{5E9}\u{5BC}\u{5C1}", Unspecified),
    (0xFB2D, 0xFB2D, Mapped, "\u{5E9}\u{5BC}\u{5C2}", Unspecified),
    (0xFB2E, 0xFB2E, Mapped, "\u{5D0}\u{5B7}", Unspecified),
    (0xFB2F, 0xFB2F, Mapped, "\u{5D0}\u{5B8}", Unspecified),
    (0xFB30, 0xFB30, Mapped, "\u{5D0}\u{5BC}", Unspecified),
    (0xFB31, 0xFB31, Mapped, "\u{5D1}\u{5BC}", Unspecified),
    (0xFB32, 0xFB32, Mapped, "\u{5D2}\u{5BC}", Unspecified),
    (0xFB33, 0xFB33, Mapped, "\u{5D3}\u{5BC}", Unspecified),
    (0xFB34, 0xFB34, Mapped, "\u{5D4}\u{5BC}", Unspecified),
    (0xFB35, 0xFB35, Mapped, "\u{5D5}\u{5BC}", Unspecified),
    (0xFB36, 0xFB36, Mapped, "\u{5D6}\u{5BC}", Unspecified),
    (0xFB37, 0xFB37, Disallowed, "", Unspecified),
    (0xFB38, 0xFB38, Mapped, "\u{5D8}\u{5BC}", Unspecified),
    (0xFB39, 0xFB39, Mapped, "\u{5D9}\u{5BC}", Unspecified),
    (0xFB3A, 0xFB3A, Mapped, "\u{5DA}\u{5BC}", Unspecified),
    (0xFB3B, 0xFB3B, Mapped, "\u{5DB}\u{5BC}", Unspecified),
    (0xFB3C, 0xFB3C, Mapped, "\u{5DC}\u{5BC}", Unspecified),
    (0xFB3D, 0xFB3D, Disallowed, "", Unspecified),
    (0xFB3E, 0xFB3E, Mapped, "\u{5DE}\u{5BC}", Unspecified),
    (0xFB3F, 0xFB3F, Disallowed, "", Unspecified),
    (0xFB40, 0xFB40, Mapped, "\u{5E0}\u{5BC}", Unspecified),
    (0xFB41, 0xFB41, Mapped, "\u{5E1}\u{5BC}", Unspecified),
    (0xFB42, 0xFB42, Disallowed, "", Unspecified),
    (0xFB43, 0xFB43, Mapped, "\u{5E3}\u{5BC}", Unspecified),
    (0xFB44, 0xFB44, Mapped, "\u{5E4}\u{5BC}", Unspecified),
    (0xFB45, 0xFB45, Disallowed, "", Unspecified),
    (0xFB46, 0xFB46, Mapped, "\u{5E6}\u{5BC}", Unspecified),
    (0xFB47, 0xFB47, Mapped, "\u{5E7}\u{5BC}", Unspecified),
    (0xFB48, 0xFB48, Mapped, "\u{5E8}\u{5BC}", Unspecified),
    (0xFB49, 0xFB49, Mapped, "\u{5E9}\u{5BC}", Unspecified),
    (0xFB4A, 0xFB4A, Mapped, "\u{5EA}\u{5BC}", Unspecified),
    (0xFB4B, 0xFB4B, Mapped, "\u{5D5}\u{5B9}", Unspecified),
    (0xFB4C, 0xFB4C, Mapped, "\u{5D1}\u{5BF}", Unspecified),
    (0xFB4D, 0xFB4D, Mapped, "\u{5DB}\u{5BF}", Unspecified),
    (0xFB4E, 0xFB4E, Mapped, "\u{5E4}\u{5BF}", Unspecified),
    (0xFB4F, 0xFB4F, Mapped, "\u{5D0}\u{5DC}", Unspecified),
    (0xFB50, 0xFB51, Mapped, "\u{671}", Unspecified),
    (0xFB52, 0xFB55, Mapped, "\u{67B}", Unspecified),
    (0xFB56, 0xFB59, Mapped, "\u{67E}", Unspecified),
    (0xFB5A, 0xFB5D, Mapped, "\u{680}", Unspecified),
    (0xFB5E, 0xFB61, Mapped, "\u{67A}", Unspecified),
    (0xFB62, 0xFB65, Mapped, "\u{67F}", Unspecified),
    (0xFB66, 0xFB69, Mapped, "\u{679}", Unspecified),
    (0xFB6A, 0xFB6D, Mapped, "\u{6A4}", Unspecified),
    (0xFB6E, 0xFB71, Mapped, "\u{6A6}", Unspecified),
    (0xFB72, 0xFB75, Mapped, "\u{684}", Unspecified),
    (0xFB76, 0xFB79, Mapped, "\u{683}", Unspecified),
    (0xFB7A, 0xFB7D, Mapped, "\u{686}", Unspecified),
    (0xFB7E, 0xFB81, Mapped, "\u{687}", Unspecified),
    (0xFB82, 0xFB83, Mapped, "\u{68D}", Unspecified),
    (0xFB84, 0xFB85, Mapped, "\u{68C}", Unspecified),
    (0xFB86, 0xFB87, Mapped, "\u{68E}", Unspecified),
    (0xFB88, 0xFB89, Mapped, "\u{688}", Unspecified),
    (0xFB8A, 0xFB8B, Mapped, "\u{698}", Unspecified),
    (0xFB8C, 0xFB8D, Mapped, "\u{691}", Unspecified),
    (0xFB8E, 0xFB91, Mapped, "\u{6A9}", Unspecified),
    (0xFB92, 0xFB95, Mapped, "\u{6AF}", Unspecified),
    (0xFB96, 0xFB99, Mapped, "\u{6B3}", Unspecified),
    (0xFB9A, 0xFB9D, Mapped, "\u{6B1}", Unspecified),
    (0xFB9E, 0xFB9F, Mapped, "\u{6BA}", Unspecified),
    (0xFBA0, 0xFBA3, Mapped, "\u{6BB}", Unspecified),
    (0xFBA4, 0xFBA5, Mapped, "\u{6C0}", Unspecified),
    (0xFBA6, 0xFBA9, Mapped, "\u{6C1}", Unspecified),
    (0xFBAA, 0xFBAD, Mapped, "\u{6BE}", Unspecified),
    (0xFBAE, 0xFBAF, Mapped, "\u{6D2}", Unspecified),
    (0xFBB0, 0xFBB1, Mapped, "\u{6D3}", Unspecified),
    (0xFBB2, 0xFBC1, Valid, "", Nv8),
    (0xFBC2, 0xFBD2, Disallowed, "", Unspecified),
    (0xFBD3, 0xFBD6, Mapped, "\u{6AD}", Unspecified),
    (0xFBD7, 0xFBD8, Mapped, "\u{6C7}", Unspecified),
    (0xFBD9, 0xFBDA, Mapped, "\u{6C6}", Unspecified),
    (0xFBDB, 0xFBDC, Mapped, "\u{6C8}", Unspecified),
    (0xFBDD, 0xFBDD, Mapped, "\u{6C7}\u{674}", Unspecified),
    (0xFBDE, 0xFBDF, Mapped, "\u{6CB}", Unspecified),
    (0xFBE0, 0xFBE1, Mapped, "\u{6C5}", Unspecified),
    (0xFBE2, 0xFBE3, Mapped, "\u{6C9}", Unspecified),
    (0xFBE4, 0xFBE7, Mapped, "\u{6D0}", Unspecified),
    (0xFBE8, 0xFBE9, Mapped, "\u{649}", Unspecified),
    (0xFBEA, 0xFBEB, Mapped, "\u{626}\u{627}", Unspecified),
    (0xFBEC, 0xFBED, Mapped, "\u{626}\u{6D5}", Unspecified),
    (0xFBEE, 0xFBEF, Mapped, "\u{626}\u{648}", Unspecified),
    (0xFBF0, 0xFBF1, Mapped, "\u{626}\u{6C7}", Unspecified),
    (0xFBF2, 0xFBF3, Mapped, "\u{626}\u{6C6}", Unspecified),
    (0xFBF4, 0xFBF5, Mapped, "\u{626}\u{6C8}", Unspecified),
    (0xFBF6, 0xFBF8, Mapped, "\u{626}\u{6D0}", Unspecified),
    (0xFBF9, 0xFBFB, Mapped, "\u{626}\u{649}", Unspecified),
    (0xFBFC, 0xFBFF, Mapped, "\u{6CC}", Unspecified),
    (0xFC00, 0xFC00, Mapped, "\u{626}\u{62C}", Unspecified),
    (0xFC01, 0xFC01, Mapped, "\u{626}\u{62D}", Unspecified),
    (0xFC02, 0xFC02, Mapped, "\u{626}\u{645}", Unspecified),
    (0xFC03, 0xFC03, Mapped, "\u{626}\u{649}", Unspecified),
    (0xFC04, 0xFC04, Mapped, "\u{626}\u{64A}", Unspecified),
    (0xFC05, 0xFC05, Mapped, "\u{628}\u{62C}", Unspecified),
    (0xFC06, 0xFC06, Mapped, "\u{628}\u{62D}", Unspecified),
    (0xFC07, 0xFC07, Mapped, "\u{628}\u{62E}", Unspecified),
    (0xFC08, 0xFC08, Mapped, "\u{628}\u{645}", Unspecified),
    (0xFC09, 0xFC09, Mapped, "\u{628}\u{649}", Unspecified),
    (0xFC0A, 0xFC0A, Mapped, "\u{628}\u{64A}", Unspecified),
    (0xFC0B, 0xFC0B, Mapped, "\u{62A}\u{62C}", Unspecified),
    (0xFC0C, 0xFC0C, Mapped, "\u{62A}\u{62D}", Unspecified),
    (0xFC0D, 0xFC0D, Mapped, "\u{62A}\u{62E}", Unspecified),
    (0xFC0E, 0xFC0E, Mapped, "\u{62A}\u{645}", Unspecified),
    (0xFC0F, 0xFC0F, Mapped, "\u{62A}\u{649}", Unspecified),
    (0xFC10, 0xFC10, Mapped, "\u{62A}\u{64A}", Unspecified),
    (0xFC11, 0xFC11, Mapped, "\u{62B}\u{62C}", Unspecified),
    (0xFC12, 0xFC12, Mapped, "\u{62B}\u{645}", Unspecified),
    (0xFC13, 0xFC13, Mapped, "\u{62B}\u{649}", Unspecified),
    (0xFC14, 0xFC14, Mapped, "\u{62B}\u{64A}", Unspecified),
    (0xFC15, 0xFC15, Mapped, "\u{62C}\u{62D}", Unspecified),
    (0xFC16, 0xFC16, Mapped, "\u{62C}\u{645}", Unspecified),
    (0xFC17, 0xFC17, Mapped, "\u{62D}\u{62C}", Unspecified),
    (0xFC18, 0xFC18, Mapped, "\u{62D}\u{645}", Unspecified),
    (0xFC19, 0xFC19, Mapped, "\u{62E}\u{62C}", Unspecified),
    (0xFC1A, 0xFC1A, Mapped, "\u{62E}\u{62D}", Unspecified),
    (0xFC1B, 0xFC1B, Mapped, "\u{62E}\u{645}", Unspecified),
    (0xFC1C, 0xFC1C, Mapped, "\u{633}\u{62C}", Unspecified),
    (0xFC1D, 0xFC1D, Mapped, "\u{633}\u{62D}", Unspecified),
    (0xFC1E, 0xFC1E, Mapped, "\u{633}\u{62E}", Unspecified),
    (0xFC1F, 0xFC1F, Mapped, "\u{633}\u{645}", Unspecified),
    (0xFC20, 0xFC20, Mapped, "\u{635}\u{62D}", Unspecified),
    (0xFC21, 0xFC21, Mapped, "\u{635}\u{645}", Unspecified),
    (0xFC22, 0xFC22, Mapped, "\u{636}\u{62C}", Unspecified),
    (0xFC23, 0xFC23, Mapped, "\u{636}\u{62D}", Unspecified),
    (0xFC24, 0xFC24, Mapped, "\u{636}\u{62E}", Unspecified),
    (0xFC25, 0xFC25, Mapped, "\u{636}\u{645}", Unspecified),
    (0xFC26, 0xFC26, Mapped, "\u{637}\u{62D}", Unspecified),
    (0xFC27, 0xFC27, Mapped, "\u{637}\u{645}", Unspecified),
    (0xFC28, 0xFC28, Mapped, "\u{638}\u{645}", Unspecified),
    (0xFC29, 0xFC29, Mapped, "\u{639}\u{62C}", Unspecified),
    (0xFC2A, 0xFC2A, Mapped, "\u{639}\u{645}", Unspecified),
    (0xFC2B, 0xFC2B, Mapped, "\u{63A}\u{62C}", Unspecified),
    (0xFC2C, 0xFC2C, Mapped, "\u{63A}\u{645}", Unspecified),
    (0xFC2D, 0xFC2D, Mapped, "\u{641}\u{62C}", Unspecified),
    (0xFC2E, 0xFC2E, Mapped, "\u{641}\u{62D}", Unspecified),
    (0xFC2F, 0xFC2F, Mapped, "\u{641}\u{62E}", Unspecified),
    (0xFC30, 0xFC30, Mapped, "\u{641}\u{645}", Unspecified),
    (0xFC31, 0xFC31, Mapped, "\u{641}\u{649}", Unspecified),
    (0xFC32, 0xFC32, Mapped, "\u{641}\u{64A}", Unspecified),
    (0xFC33, 0xFC33, Mapped, "\u{642}\u{62D}", Unspecified),
    (0xFC34, 0xFC34, Mapped, "\u{642}\u{645}", Unspecified),
    (0xFC35, 0xFC35, Mapped, "\u{642}\u{649}", Unspecified),
    (0xFC36, 0xFC36, Mapped, "\u{642}\u{64A}", Unspecified),
    (0xFC37, 0xFC37, Mapped, "\u{643}\u{627}", Unspecified),
    (0xFC38, 0xFC38, Mapped, "\u{643}\u{62C}", Unspecified),
    (0xFC39, 0xFC39, Mapped, "\u{643}\u{62D}", Unspecified),
    (0xFC3A, 0xFC3A, Mapped, "\u{643}\u{62E}", Unspecified),
    (0xFC3B, 0xFC3B, Mapped, "\u{643}\u{644}", Unspecified),
    (0xFC3C, 0xFC3C, Mapped, "\u{643}\u{645}", Unspecified),
    (0xFC3D, 0xFC3D, Mapped, "\u{643}\u{649}", Unspecified),
    (0xFC3E, 0xFC3E, Mapped, "\u{643}\u{64A}", Unspecified),
    (0xFC3F, 0xFC3F, Mapped, "\u{644}\u{62C}", Unspecified),
    (0xFC40, 0xFC40, Mapped, "\u{644}\u{62D}", Unspecified),
    (0xFC41, 0xFC41, Mapped, "\u{644}\u{62E}", Unspecified),
    (0xFC42, 0xFC42, Mapped, "\u{644}\u{645}", Unspecified),
    (0xFC43, 0xFC43, Mapped, "\u{644}\u{649}", Unspecified),
    (0xFC44, 0xFC44, Mapped, "\u{644}\u{64A}", Unspecified),
    (0xFC45, 0xFC45, Mapped, "\u{645}\u{62C}", Unspecified),
    (0xFC46, 0xFC46, Mapped, "\u{645}\u{62D}", Unspecified),
    (0xFC47, 0xFC47, Mapped, "\u{645}\u{62E}", Unspecified),
    (0xFC48, 0xFC48, Mapped, "\u{645}\u{645}", Unspecified),
    (0xFC49, 0xFC49, Mapped, "\u{645}\u{649}", Unspecified),
    (0xFC4A, 0xFC4A, Mapped, "\u{645}\u{64A}", Unspecified),
    (0xFC4B, 0xFC4B, Mapped, "\u{646}\u{62C}", Unspecified),
    (0xFC4C, 0xFC4C, Mapped, "\u{646}\u{62D}", Unspecified),
    (0xFC4D, 0xFC4D, Mapped, "\u{646}\u{62E}", Unspecified),
    (0xFC4E, 0xFC4E, Mapped, "\u{646}\u{645}", Unspecified),
    (0xFC4F, 0xFC4F, Mapped, "\u{646}\u{649}", Unspecified),
    (0xFC50, 0xFC50, Mapped, "\u{646}\u{64A}", Unspecified),
    (0xFC51, 0xFC51, Mapped, "\u{647}\u{62C}", Unspecified),
    (0xFC52, 0xFC52, Mapped, "\u{647}\u{645}", Unspecified),
    (0xFC53, 0xFC53, Mapped, "\u{647}\u{649}", Unspecified),
    (0xFC54, 0xFC54, Mapped, "\u{647}\u{64A}", Unspecified),
    (0xFC55, 0xFC55, Mapped, "\u{64A}\u{62C}", Unspecified),
    (0xFC56, 0xFC56, Mapped, "\u{64A}\u{62D}", Unspecified),
    (0xFC57, 0xFC57, Mapped, "\u{64A}\u{62E}", Unspecified),
    (0xFC58, 0xFC58, Mapped, "\u{64A}\u{645}", Unspecified),
    (0xFC59, 0xFC59, Mapped, "\u{64A}\u{649}", Unspecified),
    (0xFC5A, 0xFC5A, Mapped, "\u{64A}\u{64A}", Unspecified),
    (0xFC5B, 0xFC5B, Mapped, "\u{630}\u{670}", Unspecified),
    (0xFC5C, 0xFC5C, Mapped, "\u{631}\u{670}", Unspecified),
    (0xFC5D, 0xFC5D, Mapped, "\u{649}\u{670}", Unspecified),
    (0xFC5E, 0xFC5E, DisallowedStd3Mapped, " \u{64C}\u{651}", Unspecified),
    (0xFC5F, 0xFC5F, DisallowedStd3Mapped, " \u{64D}\u{651}", Unspecified),
    (0xFC60, 0xFC60, DisallowedStd3Mapped, " \u{64E}\u{651}", Unspecified),
    (0xFC61, 0xFC61, DisallowedStd3Mapped, " \u{64F}\u{651}", Unspecified),
    (0xFC62, 0xFC62, DisallowedStd3Mapped, " \u{650}\u{651}", Unspecified),
    (0xFC63, 0xFC63, DisallowedStd3Mapped, " \u{651}\u{670}", Unspecified),
    (0xFC64, 0xFC64, Mapped, "\u{626}\u{631}", Unspecified),
    (0xFC65, 0xFC65, Mapped, "\u{626}\u{632}", Unspecified),
    (0xFC66, 0xFC66, Mapped, "\u{626}\u{645}", Unspecified),
    (0xFC67, 0xFC67, Mapped, "\u{626}\u{646}", Unspecified),
    (0xFC68, 0xFC68, Mapped, "\u{626}\u{649}", Unspecified),
    (0xFC69, 0xFC69, Mapped, "\u{626}\u{64A}", Unspecified),
    (0xFC6A, 0xFC6A, Mapped, "\u{628}\u{631}", Unspecified),
    (0xFC6B, 0xFC6B, Mapped, "\u{628}\u{632}", Unspecified),
    (0xFC6C, 0xFC6C, Mapped, "\u{628}\u{645}", Unspecified),
    (0xFC6D, 0xFC6D, Mapped, "\u{628}\u{646}", Unspecified),
    (0xFC6E, 0xFC6E, Mapped, "\u{628}\u{649}", Unspecified),
    (0xFC6F, 0xFC6F, Mapped, "\u{628}\u{64A}", Unspecified),
    (0xFC70, 0xFC70, Mapped, "\u{62A}\u{631}", Unspecified),
    (0xFC71, 0xFC71, Mapped, "\u{62A}\u{632}", Unspecified),
    (0xFC72, 0xFC72, Mapped, "\u{62A}\u{645}", Unspecified),
    (0xFC73, 0xFC73, Mapped, "\u{62A}\u{646}", Unspecified),
    (0xFC74, 0xFC74, Mapped, "\u{62A}\u{649}", Unspecified),
    (0xFC75, 0xFC75, Mapped, "\u{62A}\u{64A}", Unspecified),
    (0xFC76, 0xFC76, Mapped, "\u{62B}\u{631}", Unspecified),
    (0xFC77, 0xFC77, Mapped, "\u{62B}\u{632}", Unspecified),
    (0xFC78, 0xFC78, Mapped, "\u{62B}\u{645}", Unspecified),
    (0xFC79, 0xFC79, Mapped, "\u{62B}\u{646}", Unspecified),
    (0xFC7A, 0xFC7A, Mapped, "\u{62B}\u{649}", Unspecified),
    (0xFC7B, 0xFC7B, Mapped, "\u{62B}\u{64A}", Unspecified),
    (0xFC7C, 0xFC7C, Mapped, "\u{641}\u{649}", Unspecified),
    (0xFC7D, 0xFC7D, Mapped, "\u{641}\u{64A}", Unspecified),
    (0xFC7E, 0xFC7E, Mapped, "\u{642}\u{649}", Unspecified),
    (0xFC7F, 0xFC7F, Mapped, "\u{642}\u{64A}", Unspecified),
    (0xFC80, 0xFC80, Mapped, "\u{643}\u{627}", Unspecified),
    (0xFC81, 0xFC81, Mapped, "\u{643}\u{644}", Unspecified),
    (0xFC82, 0xFC82, Mapped, "\u{643}\u{645}", Unspecified),
    (0xFC83, 0xFC83, Mapped, "\u{643}\u{649}", Unspecified),
    (0xFC84, 0xFC84, Mapped, "\u{643}\u{64A}", Unspecified),
    (0xFC85, 0xFC85, Mapped, "\u{644}\u{645}", Unspecified),
    (0xFC86, 0xFC86, Mapped, "\u{644}\u{649}", Unspecified),
    (0xFC87, 0xFC87, Mapped, "\u{644}\u{64A}", Unspecified),
    (0xFC88, 0xFC88, Mapped, "\u{645}\u{627}", Unspecified),
    (0xFC89, 0xFC89, Mapped, "\u{645}\u{645}", Unspecified),
    (0xFC8A, 0xFC8A, Mapped, "\u{646}\u{631}", Unspecified),
    (0xFC8B, 0xFC8B, Mapped, "\u{646}\u{632}", Unspecified),
    (0xFC8C, 0xFC8C, Mapped, "\u{646}\u{645}", Unspecified),
    (0xFC8D, 0xFC8D, Mapped, "\u{646}\u{646}", Unspecified),
    (0xFC8E, 0xFC8E, Mapped, "\u{646}\u{649}", Unspecified),
    (0xFC8F, 0xFC8F, Mapped, "\u{646}\u{64A}", Unspecified),
    (0xFC90, 0xFC90, Mapped, "\u{649}\u{670}", Unspecified),
    (0xFC91, 0xFC91, Mapped, "\u{64A}\u{631}", Unspecified),
    (0xFC92, 0xFC92, Mapped, "\u{64A}\u{632}", Unspecified),
    (0xFC93, 0xFC93, Mapped, "\u{64A}\u{645}", Unspecified),
    (0xFC94, 0xFC94, Mapped, "\u{64A}\u{646}", Unspecified),
    (0xFC95, 0xFC95, Mapped, "\u{64A}\u{649}", Unspecified),
    (0xFC96, 0xFC96, Mapped, "\u{64A}\u{64A}", Unspecified),
    (0xFC97, 0xFC97, Mapped, "\u{626}\u{62C}", Unspecified),
    (0xFC98, 0xFC98, Mapped, "\u{626}\u{62D}", Unspecified),
    (0xFC99, 0xFC99, Mapped, "\u{626}\u{62E}", Unspecified),
    (0xFC9A, 0xFC9A, Mapped, "\u{626}\u{645}", Unspecified),
    (0xFC9B, 0xFC9B, Mapped, "\u{626}\u{647}", Unspecified),
    (0xFC9C, 0xFC9C, Mapped, "\u{628}\u{62C}", Unspecified),
    (0xFC9D, 0xFC9D, Mapped, "\u{628}\u{62D}", Unspecified),
    (0xFC9E, 0xFC9E, Mapped, "\u{628}\u{62E}", Unspecified),
    (0xFC9F, 0xFC9F, Mapped, "\u{628}\u{645}", Unspecified),
    (0xFCA0, 0xFCA0, Mapped, "\u{628}\u{647}", Unspecified),
    (0xFCA1, 0xFCA1, Mapped, "\u{62A}\u{62C}", Unspecified),
    (0xFCA2, 0xFCA2, Mapped, "\u{62A}\u{62D}", Unspecified),
    (0xFCA3, 0xFCA3, Mapped, "\u{62A}\u{62E}", Unspecified),
    (0xFCA4, 0xFCA4, Mapped, "\u{62A}\u{645}", Unspecified),
    (0xFCA5, 0xFCA5, Mapped, "\u{62A}\u{647}", Unspecified),
    (0xFCA6, 0xFCA6, Mapped, "\u{62B}\u{645}", Unspecified),
    (0xFCA7, 0xFCA7, Mapped, "\u{62C}\u{62D}", Unspecified),
    (0xFCA8, 0xFCA8, Mapped, "\u{62C}\u{645}", Unspecified),
    (0xFCA9, 0xFCA9, Mapped, "\u{62D}\u{62C}", Unspecified),
    (0xFCAA, 0xFCAA, Mapped, "\u{62D}\u{645}", Unspecified),
    (0xFCAB, 0xFCAB, Mapped, "\u{62E}\u{62C}", Unspecified),
    (0xFCAC, 0xFCAC, Mapped, "\u{62E}\u{645}", Unspecified),
    (0xFCAD, 0xFCAD, Mapped, "\u{633}\u{62C}", Unspecified),
    (0xFCAE, 0xFCAE, Mapped, "\u{633}\u{62D}", Unspecified),
    (0xFCAF, 0xFCAF, Mapped, "\u{633}\u{62E}", Unspecified),
    (0xFCB0, 0xFCB0, Mapped, "\u{633}\u{645}", Unspecified),
    (0xFCB1, 0xFCB1, Mapped, "\u{635}\u{62D}", Unspecified),
    (0xFCB2, 0xFCB2, Mapped, "\u{635}\u{62E}", Unspecified),
    (0xFCB3, 0xFCB3, Mapped, "\u{635}\u{645}", Unspecified),
    (0xFCB4, 0xFCB4, Mapped, "\u{636}\u{62C}", Unspecified),
    (0xFCB5, 0xFCB5, Mapped, "\u{636}\u{62D}", Unspecified),
    (0xFCB6, 0xFCB6, Mapped, "\u{636}\u{62E}", Unspecified),
    (0xFCB7, 0xFCB7, Mapped, "\u{636}\u{645}", Unspecified),
    (0xFCB8, 0xFCB8, Mapped, "\u{637}\u{62D}", Unspecified),
    (0xFCB9, 0xFCB9, Mapped, "\u{638}\u{645}", Unspecified),
    (0xFCBA, 0xFCBA, Mapped, "\u{639}\u{62C}", Unspecified),
    (0xFCBB, 0xFCBB, Mapped, "\u{639}\u{645}", Unspecified),
    (0xFCBC, 0xFCBC, Mapped, "\u{63A}\u{62C}", Unspecified),
    (0xFCBD, 0xFCBD, Mapped, "\u{63A}\u{645}", Unspecified),
    (0xFCBE, 0xFCBE, Mapped, "\u{641}\u{62C}", Unspecified),
    (0xFCBF, 0xFCBF, Mapped, "\u{641}\u{62D}", Unspecified),
    (0xFCC0, 0xFCC0, Mapped, "\u{641}\u{62E}", Unspecified),
    (0xFCC1, 0xFCC1, Mapped, "\u{641}\u{645}", Unspecified),
    (0xFCC2, 0xFCC2, Mapped, "\u{642}\u{62D}", Unspecified),
    (0xFCC3, 0xFCC3, Mapped, "\u{642}\u{645}", Unspecified),
    (0xFCC4, 0xFCC4, Mapped, "\u{643}\u{62C}", Unspecified),
    (0xFCC5, 0xFCC5, Mapped, "\u{643}\u{62D}", Unspecified),
    (0xFCC6, 0xFCC6, Mapped, "\u{643}\u{62E}", Unspecified),
    (0xFCC7, 0xFCC7, Mapped, "\u{643}\u{644}", Unspecified),
    (0xFCC8, 0xFCC8, Mapped, "\u{643}\u{645}", Unspecified),
    (0xFCC9, 0xFCC9, Mapped, "\u{644}\u{62C}", Unspecified),
    (0xFCCA, 0xFCCA, Mapped, "\u{644}\u{62D}", Unspecified),
    (0xFCCB, 0xFCCB, Mapped, "\u{644}\u{62E}", Unspecified),
    (0xFCCC, 0xFCCC, Mapped, "\u{644}\u{645}", Unspecified),
    (0xFCCD, 0xFCCD, Mapped, "\u{644}\u{647}", Unspecified),
    (0xFCCE, 0xFCCE, Mapped, "\u{645}\u{62C}", Unspecified),
    (0xFCCF, 0xFCCF, Mapped, "\u{645}\u{62D}", Unspecified),
    (0xFCD0, 0xFCD0, Mapped, "\u{645}\u{62E}", Unspecified),
    (0xFCD1, 0xFCD1, Mapped, "\u{645}\u{645}", Unspecified),
    (0xFCD2, 0xFCD2, Mapped, "\u{646}\u{62C}", Unspecified),
    (0xFCD3, 0xFCD3, Mapped, "\u{646}\u{62D}", Unspecified),
    (0xFCD4, 0xFCD4, Mapped, "\u{646}\u{62E}", Unspecified),
    (0xFCD5, 0xFCD5, Mapped, "\u{646}\u{645}", Unspecified),
    (0xFCD6, 0xFCD6, Mapped, "\u{646}\u{647}", Unspecified),
    (0xFCD7, 0xFCD7, Mapped, "\u{647}\u{62C}", Unspecified),
    (0xFCD8, 0xFCD8, Mapped, "\u{647}\u{645}", Unspecified),
    (0xFCD9, 0xFCD9, Mapped, "\u{647}\u{670}", Unspecified),
    (0xFCDA, 0xFCDA, Mapped, "\u{64A}\u{62C}", Unspecified),
    (0xFCDB, 0xFCDB, Mapped, "\u{64A}\u{62D}", Unspecified),
    (0xFCDC, 0xFCDC, Mapped, "\u{64A}\u{62E}", Unspecified),
    (0xFCDD, 0xFCDD, Mapped, "\u{64A}\u{645}", Unspecified),
    (0xFCDE, 0xFCDE, Mapped, "\u{64A}\u{647}", Unspecified),
    (0xFCDF, 0xFCDF, Mapped, "\u{626}\u{645}", Unspecified),
    (0xFCE0, 0xFCE0, Mapped, "\u{626}\u{647}", Unspecified),
    (0xFCE1, 0xFCE1, Mapped, "\u{628}\u{645}", Unspecified),
    (0xFCE2, 0xFCE2, Mapped, "\u{628}\u{647}", Unspecified),
    (0xFCE3, 0xFCE3, Mapped, "\u{62A}\u{645}", Unspecified),
    (0xFCE4, 0xFCE4, Mapped, "\u{62A}\u{647}", Unspecified),
    (0xFCE5, 0xFCE5, Mapped, "\u{62B}\u{645}", Unspecified),
    (0xFCE6, 0xFCE6, Mapped, "\u{62B}\u{647}", Unspecified),
    (0xFCE7, 0xFCE7, Mapped, "\u{633}\u{645}", Unspecified),
    (0xFCE8, 0xFCE8, Mapped, "\u{633}\u{647}", Unspecified),
    (0xFCE9, 0xFCE9, Mapped, "\u{634}\u{645}", Unspecified),
    (0xFCEA, 0xFCEA, Mapped, "\u{634}\u{647}", Unspecified),
    (0xFCEB, 0xFCEB, Mapped, "\u{643}\u{644}", Unspecified),
    (0xFCEC, 0xFCEC, Mapped, "\u{643}\u{645}", Unspecified),
    (0xFCED, 0xFCED, Mapped, "\u{644}\u{645}", Unspecified),
    (0xFCEE, 0xFCEE, Mapped, "\u{646}\u{645}", Unspecified),
    (0xFCEF, 0xFCEF, Mapped, "\u{646}\u{647}", Unspecified),
    (0xFCF0, 0xFCF0, Mapped, "\u{64A}\u{645}", Unspecified),
    (0xFCF1, 0xFCF1, Mapped, "\u{64A}\u{647}", Unspecified),
    (0xFCF2, 0xFCF2, Mapped, "\u{640}\u{64E}\u{651}", Unspecified),
    (0xFCF3, 0xFCF3, Mapped, "\u{640}\u{64F}\u{651}", Unspecified),
    (0xFCF4, 0xFCF4, Mapped, "\u{640}\u{650}\u{651}", Unspecified),
    (0xFCF5, 0xFCF5, Mapped, "\u{637}\u{649}", Unspecified),
    (0xFCF6, 0xFCF6, Mapped, "\u{637}\u{64A}", Unspecified),
    (0xFCF7, 0xFCF7, Mapped, "\u{639}\u{649}", Unspecified),
    (0xFCF8, 0xFCF8, Mapped, "\u{639}\u{64A}", Unspecified),
    (0xFCF9, 0xFCF9, Mapped, "\u{63A}\u{649}", Unspecified),
    (0xFCFA, 0xFCFA, Mapped, "\u{63A}\u{64A}", Unspecified),
    (0xFCFB, 0xFCFB, Mapped, "\u{633}\u{649}", Unspecified),
    (0xFCFC, 0xFCFC, Mapped, "\u{633}\u{64A}", Unspecified),
    (0xFCFD, 0xFCFD, Mapped, "\u{634}\u{649}", Unspecified),
    (0xFCFE, 0xFCFE, Mapped, "\u{634}\u{64A}", Unspecified),
    (0xFCFF, 0xFCFF, Mapped, "\u{62D}\u{649}", Unspecified),
    (0xFD00, 0xFD00, Mapped, "\u{62D}\u{64A}", Unspecified),
    (0xFD01, 0xFD01, Mapped, "\u{62C}\u{649}", Unspecified),
    (0xFD02, 0xFD02, Mapped, "\u{62C}\u{64A}", Unspecified),
    (0xFD03, 0xFD03, Mapped, "\u{62E}\u{649}", Unspecified),
    (0xFD04, 0xFD04, Mapped, "\u{62E}\u{64A}", Unspecified),
    (0xFD05, 0xFD05, Mapped, "\u{635}\u{649}", Unspecified),
    (0xFD06, 0xFD06, Mapped, "\u{635}\u{64A}", Unspecified),
    (0xFD07, 0xFD07, Mapped, "\u{636}\u{649}", Unspecified),
    (0xFD08, 0xFD08, Mapped, "\u{636}\u{64A}", Unspecified),
    (0xFD09, 0xFD09, Mapped, "\u{634}\u{62C}", Unspecified),
    (0xFD0A, 0xFD0A, Mapped, "\u{634}\u{62D}", Unspecified),
    (0xFD0B, 0xFD0B, Mapped, "\u{634}\u{62E}", Unspecified),
    (0xFD0C, 0xFD0C, Mapped, "\u{634}\u{645}", Unspecified),
    (0xFD0D, 0xFD0D, Mapped, "\u{634}\u{631}", Unspecified),
    (0xFD0E, 0xFD0E, Mapped, "\u{633}\u{631}", Unspecified),
    (0xFD0F, 0xFD0F, Mapped, "\u{635}\u{631}", Unspecified),
    (0xFD10, 0xFD10, Mapped, "\u{636}\u{631}", Unspecified),
    (0xFD11, 0xFD11, Mapped, "\u{637}\u{649}", Unspecified),
    (0xFD12, 0xFD12, Mapped, "\u{637}\u{64A}", Unspecified),
    (0xFD13, 0xFD13, Mapped, "\u{639}\u{649}", Unspecified),
    (0xFD14, 0xFD14, Mapped, "\u{639}\u{64A}", Unspecified),
    (0xFD15, 0xFD15, Mapped, "\u{63A}\u{649}", Unspecified),
    (0xFD16, 0xFD16, Mapped, "\u{63A}\u{64A}", Unspecified),
    (0xFD17, 0xFD17, Mapped, "\u{633}\u{649}", Unspecified),
    (0xFD18, 0xFD18, Mapped, "\u{633}\u{64A}", Unspecified),
    (0xFD19, 0xFD19, Mapped, "\u{634}\u{649}", Unspecified),
    (0xFD1A, 0xFD1A, Mapped, "\u{634}\u{64A}", Unspecified),
    (0xFD1B, 0xFD1B, Mapped, "\u{62D}\u{649}", Unspecified),
    (0xFD1C, 0xFD1C, Mapped, "\u{62D}\u{64A}", Unspecified),
    (0xFD1D, 0xFD1D, Mapped, "\u{62C}\u{649}", Unspecified),
    (0xFD1E, 0xFD1E, Mapped, "\u{62C}\u{64A}", Unspecified),
    (0xFD1F, 0xFD1F, Mapped, "\u{62E}\u{649}", Unspecified),
    (0xFD20, 0xFD20, Mapped, "\u{62E}\u{64A}", Unspecified),
    (0xFD21, 0xFD21, Mapped, "\u{635}\u{649}", Unspecified),
    (0xFD22, 0xFD22, Mapped, "\u{635}\u{64A}", Unspecified),
    (0xFD23, 0xFD23, Mapped, "\u{636}\u{649}", Unspecified),
    (0xFD24, 0xFD24, Mapped, "\u{636}\u{64A}", Unspecified),
    (0xFD25, 0xFD25, Mapped, "\u{634}\u{62C}", Unspecified),
    (0xFD26, 0xFD26, Mapped, "\u{634}\u{62D}", Unspecified),
    (0xFD27, 0xFD27, Mapped, "\u{634}\u{62E}", Unspecified),
    (0xFD28, 0xFD28, Mapped, "\u{634}\u{645}", Unspecified),
    (0xFD29, 0xFD29, Mapped, "\u{634}\u{631}", Unspecified),
    (0xFD2A, 0xFD2A, Mapped, "\u{633}\u{631}", Unspecified),
    (0xFD2B, 0xFD2B, Mapped, "\u{635}\u{631}", Unspecified),
    (0xFD2C, 0xFD2C, Mapped, "\u{636}\u{631}", Unspecified),
    (0xFD2D, 0xFD2D, Mapped, "\u{634}\u{62C}", Unspecified),
    (0xFD2E, 0xFD2E, Mapped, "\u{634}\u{62D}", Unspecified),
    (0xFD2F, 0xFD2F, Mapped, "\u{634}\u{62E}", Unspecified),
    (0xFD30, 0xFD30, Mapped, "\u{634}\u{645}", Unspecified),
    (0xFD31, 0xFD31, Mapped, "\u{633}\u{647}", Unspecified),
    (0xFD32, 0xFD32, Mapped, "\u{634}\u{647}", Unspecified),
    (0xFD33, 0xFD33, Mapped, "\u{637}\u{645}", Unspecified),
    (0xFD34, 0xFD34, Mapped, "\u{633}\u{62C}", Unspecified),
    (0xFD35, 0xFD35, Mapped, "\u{633}\u{62D}", Unspecified),
    (0xFD36, 0xFD36, Mapped, "\u{633}\u{62E}", Unspecified),
    (0xFD37, 0xFD37, Mapped, "\u{634}\u{62C}", Unspecified),
    (0xFD38, 0xFD38, Mapped, "\u{634}\u{62D}", Unspecified),
    (0xFD39, 0xFD39, Mapped, "\u{634}\u{62E}", Unspecified),
    (0xFD3A, 0xFD3A, Mapped, "\u{637}\u{645}", Unspecified),
    (0xFD3B, 0xFD3B, Mapped, "\u{638}\u{645}", Unspecified),
    (0xFD3C, 0xFD3D, Mapped, "\u{627}\u{64B}", Unspecified),
    (0xFD3E, 0xFD3F, Valid, "", Nv8),
    (0xFD40, 0xFD4F, Disallowed, "", Unspecified),
    (0xFD50, 0xFD50, Mapped, "\u{62A}\u{62C}\u{645}", Unspecified),
    (0xFD51, 0xFD52, Mapped, "\u{62A}\u{62D}\u{62C}", Unspecified),
    (0xFD53, 0xFD53, Mapped, "\u{62A}\u{62D}\u{645}", Unspecified),
    (0xFD54, 0xFD54, Mapped, "\u{62A}\u{62E}\u{645}", Unspecified),
    (0xFD55, 0xFD55, Mapped, "\u{62A}\u{645}\u{62C}", Unspecified),
    (0xFD56, 0xFD56, Mapped, "\u{62A}\u{645}\u{62D}", Unspecified),
    (0xFD57, 0xFD57, Mapped, "\u{62A}\u{645}\u{62E}", Unspecified),
    (0xFD58, 0xFD59, Mapped, "\u{62C}\u{645}\u{62D}", Unspecified),
    (0xFD5A, 0xFD5A, Mapped, "\u{62D}\u{645}\u{64A}", Unspecified),
    (0xFD5B, 0xFD5B, Mapped, "\u{62D}\u{645}\u{649}", Unspecified),
    (0xFD5C, 0xFD5C, Mapped, "\u{633}\u{62D}\u{62C}", Unspecified),
    (0xFD5D, 0xFD5D, Mapped, "\u{633}\u{62C}\u{62D}", Unspecified),
    (0xFD5E, 0xFD5E, Mapped, "\u{633}\u{62C}\u{649}", Unspecified),
    (0xFD5F, 0xFD60, Mapped, "\u{633}\u{645}\u{62D}", Unspecified),
    (0xFD61, 0xFD61, Mapped, "\u{633}\u{645}\u{62C}", Unspecified),
    (0xFD62, 0xFD63, Mapped, "\u{633}\u{645}\u{645}", Unspecified),
    (0xFD64, 0xFD65, Mapped, "\u{635}\u{62D}\u{62D}", Unspecified),
    (0xFD66, 0xFD66, Mapped, "\u{635}\u{645}\u{645}", Unspecified),
    (0xFD67, 0xFD68, Mapped, "\u{634}\u{62D}\u{645}", Unspecified),
    (0xFD69, 0xFD69, Mapped, "\u{634}\u{62C}\u{64A}", Unspecified),
    (0xFD6A, 0xFD6B, Mapped, "\u{634}\u{645}\u{62E}", Unspecified),
    (0xFD6C, 0xFD6D, Mapped, "\u{634}\u{645}\u{645}", Unspecified),
    (0xFD6E, 0xFD6E, Mapped, "\u{636}\u{62D}\u{649}", Unspecified),
    (0xFD6F, 0xFD70, Mapped, "\u{636}\u{62E}\u{645}", Unspecified),
    (0xFD71, 0xFD72, Mapped, "\u{637}\u{645}\u{62D}", Unspecified),
    (0xFD73, 0xFD73, Mapped, "\u{637}\u{645}\u{645}", Unspecified),
    (0xFD74, 0xFD74, Mapped, "\u{637}\u{645}\u{64A}", Unspecified),
    (0xFD75, 0xFD75, Mapped, "\u{639}\u{62C}\u{645}", Unspecified),
    (0xFD76, 0xFD77, Mapped, "\u{639}\u{645}\u{645}", Unspecified),
    (0xFD78, 0xFD78, Mapped, "\u{639}\u{645}\u{649}", Unspecified),
    (0xFD79, 0xFD79, Mapped, "\u{63A}\u{645}\u{645}", Unspecified),
    (0xFD7A, 0xFD7A, Mapped, "\u{63A}\u{645}\u{64A}", Unspecified),
    (0xFD7B, 0xFD7B, Mapped, "\u{63A}\u{645}\u{649}", Unspecified),
    (0xFD7C, 0xFD7D, Mapped, "\u{641}\u{62E}\u{645}", Unspecified),
    (0xFD7E, 0xFD7E, Mapped, "\u{642}\u{645}\u{62D}", Unspecified),
    (0xFD7F, 0xFD7F, Mapped, "\u{642}\u{645}\u{645}", Unspecified),
    (0xFD80, 0xFD80, Mapped, "\u{644}\u{62D}\u{645}", Unspecified),
    (0xFD81, 0xFD81, Mapped, "\u{644}\u{62D}\u{64A}", Unspecified),
    (0xFD82, 0xFD82, Mapped, "\u{644}\u{62D}\u{649}", Unspecified),
    (0xFD83, 0xFD84, Mapped, "\u{644}\u{62C}\u{62C}", Unspecified),
    (0xFD85, 0xFD86, Mapped, "\u{644}\u{62E}\u{645}", Unspecified),
    (0xFD87, 0xFD88, Mapped, "\u{644}\u{645}\u{62D}", Unspecified),
    (0xFD89, 0xFD89, Mapped, "\u{645}\u{62D}\u{62C}", Unspecified),
    (0xFD8A, 0xFD8A, Mapped, "\u{645}\u{62D}\u{645}", Unspecified),
    (0xFD8B, 0xFD8B, Mapped, "\u{645}\u{62D}\u{64A}", Unspecified),
    (0xFD8C, 0xFD8C, Mapped, "\u{645}\u{62C}\u{62D}", Unspecified),
    (0xFD8D, 0xFD8D, Mapped, "\u{645}\u{62C}\u{645}", Unspecified),
    (0xFD8E, 0xFD8E, Mapped, "\u{645}\u{62E}\u{62C}", Unspecified),
    (0xFD8F, 0xFD8F, Mapped, "\u{645}\u{62E}\u{645}", Unspecified),
    (0xFD90, 0xFD91, Disallowed, "", Unspecified),
    (0xFD92, 0xFD92, Mapped, "\u{645}\u{62C}\u{62E}", Unspecified),
    (0xFD93, 0xFD93, Mapped, "\u{647}\u{645}\u{62C}", Unspecified),
    (0xFD94, 0xFD94, Mapped, "\u{647}\u{645}\u{645}", Unspecified),
    (0xFD95, 0xFD95, Mapped, "\u{646}\u{62D}\u{645}", Unspecified),
    (0xFD96, 0xFD96, Mapped, "\u{646}\u{62D}\u{649}", Unspecified),
    (0xFD97, 0xFD98, Mapped, "\u{646}\u{62C}\u{645}", Unspecified),
    (0xFD99, 0xFD99, Mapped, "\u{646}\u{62C}\u{649}", Unspecified),
    (0xFD9A, 0xFD9A, Mapped, "\u{646}\u{645}\u{64A}", Unspecified),
    (0xFD9B, 0xFD9B, Mapped, "\u{646}\u{645}\u{649}", Unspecified),
    (0xFD9C, 0xFD9D, Mapped, "\u{64A}\u{645}\u{645}", Unspecified),
    (0xFD9E, 0xFD9E, Mapped, "\u{628}\u{62E}\u{64A}", Unspecified),
    (0xFD9F, 0xFD9F, Mapped, "\u{62A}\u{62C}\u{64A}", Unspecified),
    (0xFDA0, 0xFDA0, Mapped, "\u{62A}\u{62C}\u{649}", Unspecified),
    (0xFDA1, 0xFDA1, Mapped, "\u{62A}\u{62E}\u{64A}", Unspecified),
    (0xFDA2, 0xFDA2, Mapped, "\u{62A}\u{62E}\u{649}", Unspecified),
    (0xFDA3, 0xFDA3, Mapped, "\u{62A}\u{645}\u{64A}", Unspecified),
    (0xFDA4, 0xFDA4, Mapped, "\u{62A}\u{645}\u{649}", Unspecified),
    (0xFDA5, 0xFDA5, Mapped, "\u{62C}\u{645}\u{64A}", Unspecified),
    (0xFDA6, 0xFDA6, Mapped, "\u{62C}\u{62D}\u{649}", Unspecified),
    (0xFDA7, 0xFDA7, Mapped, "\u{62C}\u{645}\u{649}", Unspecified),
    (0xFDA8, 0xFDA8, Mapped, "\u{633}\u{62E}\u{649}", Unspecified),
    (0xFDA9, 0xFDA9, Mapped, "\u{635}\u{62D}\u{64A}", Unspecified),
    (0xFDAA, 0xFDAA, Mapped, "\u{634}\u{62D}\u{64A}", Unspecified),
    (0xFDAB, 0xFDAB, Mapped, "\u{636}\u{62D}\u{64A}", Unspecified),
    (0xFDAC, 0xFDAC, Mapped, "\u{644}\u{62C}\u{64A}", Unspecified),
    (0xFDAD, 0xFDAD, Mapped, "\u{644}\u{645}\u{64A}", Unspecified),
    (0xFDAE, 0xFDAE, Mapped, "\u{64A}\u{62D}\u{64A}", Unspecified),
    (0xFDAF, 0xFDAF, Mapped, "\u{64A}\u{62C}\u{64A}", Unspecified),
    (0xFDB0, 0xFDB0, Mapped, "\u{64A}\u{645}\u{64A}", Unspecified),
    (0xFDB1, 0xFDB1, Mapped, "\u{645}\u{645}\u{64A}", Unspecified),
    (0xFDB2, 0xFDB2, Mapped, "\u{642}\u{645}\u{64A}", Unspecified),
    (0xFDB3, 0xFDB3, Mapped, "\u{646}\u{62D}\u{64A}", Unspecified),
    (0xFDB4, 0xFDB4, Mapped, "\u{642}\u{645}\u{62D}", Unspecified),
    (0xFDB5, 0xFDB5, Mapped, "\u{644}\u{62D}\u{645}", Unspecified),
    (0xFDB6, 0xFDB6, Mapped, "\u{639}\u{645}\u{64A}", Unspecified),
    (0xFDB7, 0xFDB7, Mapped, "\u{643}\u{645}\u{64A}", Unspecified),
    (0xFDB8, 0xFDB8, Mapped, "\u{646}\u{62C}\u{62D}", Unspecified),
    (0xFDB9, 0xFDB9, Mapped, "\u{645}\u{62E}\u{64A}", Unspecified),
    (0xFDBA, 0xFDBA, Mapped, "\u{644}\u{62C}\u{645}", Unspecified),
    (0xFDBB, 0xFDBB, Mapped, "\u{643}\u{645}\u{645}", Unspecified),
    (0xFDBC, 0xFDBC, Mapped, "\u{644}\u{62C}\u{645}", Unspecified),
    (0xFDBD, 0xFDBD, Mapped, "\u{646}\u{62C}\u{62D}", Unspecified),
    (0xFDBE, 0xFDBE, Mapped, "\u{62C}\u{62D}\u{64A}", Unspecified),
    (0xFDBF, 0xFDBF, Mapped, "\u{62D}\u{62C}\u{64A}", Unspecified),
    (0xFDC0, 0xFDC0, Mapped, "\u{645}\u{62C}\u{64A}", Unspecified),
    (0xFDC1, 0xFDC1, Mapped, "\u{641}\u{645}\u{64A}", Unspecified),
    (0xFDC2, 0xFDC2, Mapped, "\u{628}\u{62D}\u{64A}", Unspecified),
    (0xFDC3, 0xFDC3, Mapped, "\u{643}\u{645}\u{645}", Unspecified),
    (0xFDC4, 0xFDC4, Mapped, "\u{639}\u{62C}\u{645}", Unspecified),
    (0xFDC5, 0xFDC5, Mapped, "\u{635}\u{645}\u{645}", Unspecified),
    (0xFDC6, 0xFDC6, Mapped, "\u{633}\u{62E}\u{64A}", Unspecified),
    (0xFDC7, 0xFDC7, Mapped, "\u{646}\u{62C}\u{64A}", Unspecified),
    (0xFDC8, 0xFDEF, Disallowed, "", Unspecified),
    (0xFDF0, 0xFDF0, Mapped, "\u{635}\u{644}\u{6D2}", Unspecified),
    (0xFDF1, 0xFDF1, Mapped, "\u{642}\u{644}\u{6D2}", Unspecified),
    (0xFDF2, 0xFDF2, Mapped, "\u{627}\u{644}\u{644}\u{647}", Unspecified),
    (0xFDF3, 0xFDF3, Mapped, "\u{627}\u{643}\u{628}\u{631}", Unspecified),
    (0xFDF4, 0xFDF4, Mapped, "\u{645}\u{62D}\u{645}\u{62F}", Unspecified),
    (0xFDF5, 0xFDF5, Mapped, "\u{635}\u{644}\u{639}\u{645}", Unspecified),
    (0xFDF6, 0xFDF6, Mapped, "\u{631}\u{633}\u{648}\u{644}", Unspecified),
    (0xFDF7, 0xFDF7, Mapped, "\u{639}\u{644}\u{64A}\u{647}", Unspecified),
    (0xFDF8, 0xFDF8, Mapped, "\u{648}\u{633}\u{644}\u{645}", Unspecified),
    (0xFDF9, 0xFDF9, Mapped, "\u{635}\u{644}\u{649}", Unspecified),
    (0xFDFA, 0xFDFA, DisallowedStd3Mapped, "\u{635}\u{644}\u{649} \u{627}\u{644}\u{644}\u{647} \u{639}\u{644}\u{64A}\u{647} \u{648}\u{633}\u{644}\u{645}", Unspecified),
    (0xFDFB, 0xFDFB, DisallowedStd3Mapped, "\u{62C}\u{644} \u{62C}\u{644}\u{627}\u{644}\u{647}", Unspecified),
    (0xFDFC, 0xFDFC, Mapped, "\u{631}\u{6CC}\u{627}\u{644}", Unspecified),
    (0xFDFD, 0xFDFD, Valid, "", Nv8),
    (0xFDFE, 0xFDFF, Disallowed, "", Unspecified),
    (0xFE00, 0xFE0F, Ignored, "", Unspecified),
    (0xFE10, 0xFE10, DisallowedStd3Mapped, ",", Unspecified),
    (0xFE11, 0xFE11, Mapped, "\u{3001}", Unspecified),
    (0xFE12, 0xFE12, Disallowed, "", Unspecified),
    (0xFE13, 0xFE13, DisallowedStd3Mapped, ":", Unspecified),
    (0xFE14, 0xFE14, DisallowedStd3Mapped, ";", Unspecified),
    (0xFE15, 0xFE15, DisallowedStd3Mapped, "!", Unspecified),
    (0xFE16, 0xFE16, DisallowedStd3Mapped, "?", Unspecified),
    (0xFE17, 0xFE17, Mapped, "\u{3016}", Unspecified),
    (0xFE18, 0xFE18, Mapped, "\u{3017}", Unspecified),
    (0xFE19, 0xFE1F, Disallowed, "", Unspecified),
    (0xFE20, 0xFE2F, Valid, "", Unspecified),
    (0xFE30, 0xFE30, Disallowed, "", Unspecified),
    (0xFE31, 0xFE31, Mapped, "\u{2014}", Unspecified),
    (0xFE32, 0xFE32, Mapped, "\u{2013}", Unspecified),
    (0xFE33, 0xFE34, DisallowedStd3Mapped, "_", Unspecified),
    (0xFE35, 0xFE35, DisallowedStd3Mapped, "(", Unspecified),
    (0xFE36, 0xFE36, DisallowedStd3Mapped, ")", Unspecified),
    (0xFE37, 0xFE37, DisallowedStd3Mapped, "{", Unspecified),
    (0xFE38, 0xFE38, DisallowedStd3Mapped, "}", Unspecified),
    (0xFE39, 0xFE39, Mapped, "\u{3014}", Unspecified),
    (0xFE3A, 0xFE3A, Mapped, "\u{3015}", Unspecified),
    (0xFE3B, 0xFE3B, Mapped, "\u{3010}", Unspecified),
    (0xFE3C, 0xFE3C, Mapped, "\u{3011}", Unspecified),
    (0xFE3D, 0xFE3D, Mapped, "\u{300A}", Unspecified),
    (0xFE3E, 0xFE3E, Mapped, "\u{300B}", Unspecified),
    (0xFE3F, 0xFE3F, Mapped, "\u{3008}", Unspecified),
    (0xFE40, 0xFE40, Mapped, "\u{3009}", Unspecified),
    (0xFE41, 0xFE41, Mapped, "\u{300C}", Unspecified),
    (0xFE42, 0xFE42, Mapped, "\u{300D}", Unspecified),
    (0xFE43, 0xFE43, Mapped, "\u{300E}", Unspecified),
    (0xFE44, 0xFE44, Mapped, "\u{300F}", Unspecified),
    (0xFE45, 0xFE46, Valid, "", Nv8),
    (0xFE47, 0xFE47, DisallowedStd3Mapped, "[", Unspecified),
    (0xFE48, 0xFE48, DisallowedStd3Mapped, "]", Unspecified),
    (0xFE49, 0xFE4C, DisallowedStd3Mapped, " \u{305}", Unspecified),
    (0xFE4D, 0xFE4F, DisallowedStd3Mapped, "_", Unspecified),
    (0xFE50, 0xFE50, DisallowedStd3Mapped, ",", Unspecified),
    (0xFE51, 0xFE51, Mapped, "\u{3001}", Unspecified),
    (0xFE52, 0xFE53, Disallowed, "", Unspecified),
    (0xFE54, 0xFE54, DisallowedStd3Mapped, ";", Unspecified),
    (0xFE55, 0xFE55, DisallowedStd3Mapped, ":", Unspecified),
    (0xFE56, 0xFE56, DisallowedStd3Mapped, "?", Unspecified),
    (0xFE57, 0xFE57, DisallowedStd3Mapped, "!", Unspecified),
    (0xFE58, 0xFE58, Mapped, "\u{2014}", Unspecified),
    (0xFE59, 0xFE59, DisallowedStd3Mapped, "(", Unspecified),
    (0xFE5A, 0xFE5A, DisallowedStd3Mapped, ")", Unspecified),
    (0xFE5B, 0xFE5B, DisallowedStd3Mapped, "{", Unspecified),
    (0xFE5C, 0xFE5C, DisallowedStd3Mapped, "}", Unspecified),
    (0xFE5D, 0xFE5D, Mapped, "\u{3014}", Unspecified),
    (0xFE5E, 0xFE5E, Mapped, "\u{3015}", Unspecified),
    (0xFE5F, 0xFE5F, DisallowedStd3Mapped, "#", Unspecified),
    (0xFE60, 0xFE60, DisallowedStd3Mapped, "&", Unspecified),
    (0xFE61, 0xFE61, DisallowedStd3Mapped, "*", Unspecified),
    (0xFE62, 0xFE62, DisallowedStd3Mapped, "+", Unspecified),
    (0xFE63, 0xFE63, Mapped, "-", Unspecified),
    (0xFE64, 0xFE64, DisallowedStd3Mapped, "<", Unspecified),
    (0xFE65, 0xFE65, DisallowedStd3Mapped, ">", Unspecified),
    (0xFE66, 0xFE66, DisallowedStd3Mapped, "=", Unspecified),
    (0xFE67, 0xFE67, Disallowed, "", Unspecified),
    (0xFE68, 0xFE68, DisallowedStd3Mapped, "\u{5C}", Unspecified),
    (0xFE69, 0xFE69, DisallowedStd3Mapped, "$", Unspecified),
    (0xFE6A, 0xFE6A, DisallowedStd3Mapped, "%", Unspecified),
    (0xFE6B, 0xFE6B, DisallowedStd3Mapped, "@", Unspecified),
    (0xFE6C, 0xFE6F, Disallowed, "", Unspecified),
    (0xFE70, 0xFE70, DisallowedStd3Mapped, " \u{64B}", Unspecified),
    (0xFE71, 0xFE71, Mapped, "\u{640}\u{64B}", Unspecified),
    (0xFE72, 0xFE72, DisallowedStd3Mapped, " \u{64C}", Unspecified),
    (0xFE73, 0xFE73, Valid, "", Unspecified),
    (0xFE74, 0xFE74, DisallowedStd3Mapped, " \u{64D}", Unspecified),
    (0xFE75, 0xFE75, Disallowed, "", Unspecified),
    (0xFE76, 0xFE76, DisallowedStd3Mapped, " \u{64E}", Unspecified),
    (0xFE77, 0xFE77, Mapped, "\u{640}\u{64E}", Unspecified),
    (0xFE78, 0xFE78, DisallowedStd3Mapped, " \u{64F}", Unspecified),
    (0xFE79, 0xFE79, Mapped, "\u{640}\u{64F}", Unspecified),
    (0xFE7A, 0xFE7A, DisallowedStd3Mapped, " \u{650}", Unspecified),
    (0xFE7B, 0xFE7B, Mapped, "\u{640}\u{650}", Unspecified),
    (0xFE7C, 0xFE7C, DisallowedStd3Mapped, " \u{651}", Unspecified),
    (0xFE7D, 0xFE7D, Mapped, "\u{640}\u{651}", Unspecified),
    (0xFE7E, 0xFE7E, DisallowedStd3Mapped, " \u{652}", Unspecified),
    (0xFE7F, 0xFE7F, Mapped, "\u{640}\u{652}", Unspecified),
    (0xFE80, 0xFE80, Mapped, "\u{621}", Unspecified),
    (0xFE81, 0xFE82, Mapped, "\u{622}", Unspecified),
    (0xFE83, 0xFE84, Mapped, "\u{623}", Unspecified),
    (0xFE85, 0xFE86, Mapped, "\u{624}", Unspecified),
    (0xFE87, 0xFE88, Mapped, "\u{625}", Unspecified),
    (0xFE89, 0xFE8C, Mapped, "\u{626}", Unspecified),
    (0xFE8D, 0xFE8E, Mapped, "\u{627}", Unspecified),
    (0xFE8F, 0xFE92, Mapped, "\u{628}", Unspecified),
    (0xFE93, 0xFE94, Mapped, "\u{629}", Unspecified),
    (0xFE95, 0xFE98, Mapped, "\u{62A}", Unspecified),
    (0xFE99, 0xFE9C, Mapped, "\u{62B}", Unspecified),
    (0xFE9D, 0xFEA0, Mapped, "\u{62C}", Unspecified),
    (0xFEA1, 0xFEA4, Mapped, "\u{62D}", Unspecified),
    (0xFEA5, 0xFEA8, Mapped, "\u{62E}", Unspecified),
    (0xFEA9, 0xFEAA, Mapped, "\u{62F}", Unspecified),
    (0xFEAB, 0xFEAC, Mapped, "\u{630}", Unspecified),
    (0xFEAD, 0xFEAE, Mapped, "\u{631}", Unspecified),
    (0xFEAF, 0xFEB0, Mapped, "\u{632}", Unspecified),
    (0xFEB1, 0xFEB4, Mapped, "\u{633}", Unspecified),
    (0xFEB5, 0xFEB8, Mapped, "\u{634}", Unspecified),
    (0xFEB9, 0xFEBC, Mapped, "\u{635}", Unspecified),
    (0xFEBD, 0xFEC0, Mapped, "\u{636}", Unspecified),
    (0xFEC1, 0xFEC4, Mapped, "\u{637}", Unspecified),
    (0xFEC5, 0xFEC8, Mapped, "\u{638}", Unspecified),
    (0xFEC9, 0xFECC, Mapped, "\u{639}", Unspecified),
    (0xFECD, 0xFED0, Mapped, "\u{63A}", Unspecified),
    (0xFED1, 0xFED4, Mapped, "\u{641}", Unspecified),
    (0xFED5, 0xFED8, Mapped, "\u{642}", Unspecified),
    (0xFED9, 0xFEDC, Mapped, "\u{643}", Unspecified),
    (0xFEDD, 0xFEE0, Mapped, "\u{644}", Unspecified),
    (0xFEE1, 0xFEE4, Mapped, "\u{645}", Unspecified),
    (0xFEE5, 0xFEE8, Mapped, "\u{646}", Unspecified),
    (0xFEE9, 0xFEEC, Mapped, "\u{647}", Unspecified),
    (0xFEED, 0xFEEE, Mapped, "\u{648}", Unspecified),
    (0xFEEF, 0xFEF0, Mapped, "\u{649}", Unspecified),
    (0xFEF1, 0xFEF4, Mapped, "\u{64A}", Unspecified),
    (0xFEF5, 0xFEF6, Mapped, "\u{644}\u{622}", Unspecified),
    (0xFEF7, 0xFEF8, Mapped, "\u{644}\u{623}", Unspecified),
    (0xFEF9, 0xFEFA, Mapped, "\u{644}\u{625}", Unspecified),
    (0xFEFB, 0xFEFC, Mapped, "\u{644}\u{627}", Unspecified),
    (0xFEFD, 0xFEFE, Disallowed, "", Unspecified),
    (0xFEFF, 0xFEFF, Ignored, "", Unspecified),
    (0xFF00, 0xFF00, Disallowed, "", Unspecified),
    (0xFF01, 0xFF01, DisallowedStd3Mapped, "!", Unspecified),
    (0xFF02, 0xFF02, DisallowedStd3Mapped, "\u{22}", Unspecified),
    (0xFF03, 0xFF03, DisallowedStd3Mapped, "#", Unspecified),
    (0xFF04, 0xFF04, DisallowedStd3Mapped, "$", Unspecified),
    (0xFF05, 0xFF05, DisallowedStd3Mapped, "%", Unspecified),
    (0xFF06, 0xFF06, DisallowedStd3Mapped, "&", Unspecified),
    (0xFF07, 0xFF07, DisallowedStd3Mapped, "'", Unspecified),
    (0xFF08, 0xFF08, DisallowedStd3Mapped, "(", Unspecified),
    (0xFF09, 0xFF09, DisallowedStd3Mapped, ")", Unspecified),
    (0xFF0A, 0xFF0A, DisallowedStd3Mapped, "*", Unspecified),
    (0xFF0B, 0xFF0B, DisallowedStd3Mapped, "+", Unspecified),
    (0xFF0C, 0xFF0C, DisallowedStd3Mapped, ",", Unspecified),
    (0xFF0D, 0xFF0D, Mapped, "-", Unspecified),
    (0xFF0E, 0xFF0E, Mapped, ".", Unspecified),
    (0xFF0F, 0xFF0F, DisallowedStd3Mapped, "/", Unspecified),
    (0xFF10, 0xFF10, Mapped, "0", Unspecified),
    (0xFF11, 0xFF11, Mapped, "1", Unspecified),
    (0xFF12, 0xFF12, Mapped, "2", Unspecified),
    (0xFF13, 0xFF13, Mapped, "3", Unspecified),
    (0xFF14, 0xFF14, Mapped, "4", Unspecified),
    (0xFF15, 0xFF15, Mapped, "5", Unspecified),
    (0xFF16, 0xFF16, Mapped, "6", Unspecified),
    (0xFF17, 0xFF17, Mapped, "7", Unspecified),
    (0xFF18, 0xFF18, Mapped, "8", Unspecified),
    (0xFF19, 0xFF19, Mapped, "9", Unspecified),
    (0xFF1A, 0xFF1A, DisallowedStd3Mapped, ":", Unspecified),
    (0xFF1B, 0xFF1B, DisallowedStd3Mapped, ";", Unspecified),
    (0xFF1C, 0xFF1C, DisallowedStd3Mapped, "<", Unspecified),
    (0xFF1D, 0xFF1D, DisallowedStd3Mapped, "=", Unspecified),
    (0xFF1E, 0xFF1E, DisallowedStd3Mapped, ">", Unspecified),
    (0xFF1F, 0xFF1F, DisallowedStd3Mapped, "?", Unspecified),
    (0xFF20, 0xFF20, DisallowedStd3Mapped, "@", Unspecified),
    (0xFF21, 0xFF21, Mapped, "a", Unspecified),
    (0xFF22, 0xFF22, Mapped, "b", Unspecified),
    (0xFF23, 0xFF23, Mapped, "c", Unspecified),
    (0xFF24, 0xFF24, Mapped, "d", Unspecified),
    (0xFF25, 0xFF25, Mapped, "e", Unspecified),
    (0xFF26, 0xFF26, Mapped, "f", Unspecified),
    (0xFF27, 0xFF27, Mapped, "g", Unspecified),
    (0xFF28, 0xFF28, Mapped, "h", Unspecified),
    (0xFF29, 0xFF29, Mapped, "i", Unspecified),
    (0xFF2A, 0xFF2A, Mapped, "j", Unspecified),
    (0xFF2B, 0xFF2B, Mapped, "k", Unspecified),
    (0xFF2C, 0xFF2C, Mapped, "l", Unspecified),
    (0xFF2D, 0xFF2D, Mapped, "m", Unspecified),
    (0xFF2E, 0xFF2E, Mapped, "n", Unspecified),
    (0xFF2F, 0xFF2F, Mapped, "o", Unspecified),
    (0xFF30, 0xFF30, Mapped, "p", Unspecified),
    (0xFF31, 0xFF31, Mapped, "q", Unspecified),
    (0xFF32, 0xFF32, Mapped, "r", Unspecified),
    (0xFF33, 0xFF33, Mapped, "s", Unspecified),
    (0xFF34, 0xFF34, Mapped, "t", Unspecified),
    (0xFF35, 0xFF35, Mapped, "u", Unspecified),
    (0xFF36, 0xFF36, Mapped, "v", Unspecified),
    (0xFF37, 0xFF37, Mapped, "w", Unspecified),
    (0xFF38, 0xFF38, Mapped, "x", Unspecified),
    (0xFF39, 0xFF39, Mapped, "y", Unspecified),
    (0xFF3A, 0xFF3A, Mapped, "z", Unspecified),
    (0xFF3B, 0xFF3B, DisallowedStd3Mapped, "[", Unspecified),
    (0xFF3C, 0xFF3C, DisallowedStd3Mapped, "\u{5C}", Unspecified),
    (0xFF3D, 0xFF3D, DisallowedStd3Mapped, "]", Unspecified),
    (0xFF3E, 0xFF3E, DisallowedStd3Mapped, "^", Unspecified),
    (0xFF3F, 0xFF3F, DisallowedStd3Mapped, "_", Unspecified),
    (0xFF40, 0xFF40, DisallowedStd3Mapped, "`", Unspecified),
    (0xFF41, 0xFF41, Mapped, "a", Unspecified),
    (0xFF42, 0xFF42, Mapped, "b", Unspecified),
    (0xFF43, 0xFF43, Mapped, "c", Unspecified),
    (0xFF44, 0xFF44, Mapped, "d", Unspecified),
    (0xFF45, 0xFF45, Mapped, "e", Unspecified),
    (0xFF46, 0xFF46, Mapped, "f", Unspecified),
    (0xFF47, 0xFF47, Mapped, "g", Unspecified),
    (0xFF48, 0xFF48, Mapped, "h", Unspecified),
    (0xFF49, 0xFF49, Mapped, "i", Unspecified),
    (0xFF4A, 0xFF4A, Mapped, "j", Unspecified),
    (0xFF4B, 0xFF4B, Mapped, "k", Unspecified),
    (0xFF4C, 0xFF4C, Mapped, "l", Unspecified),
    (0xFF4D, 0xFF4D, Mapped, "m", Unspecified),
    (0xFF4E, 0xFF4E, Mapped, "n", Unspecified),
    (0xFF4F, 0xFF4F, Mapped, "o", Unspecified),
    (0xFF50, 0xFF50, Mapped, "p", Unspecified),
    (0xFF51, 0xFF51, Mapped, "q", Unspecified),
    (0xFF52, 0xFF52, Mapped, "r", Unspecified),
    (0xFF53, 0xFF53, Mapped, "s", Unspecified),
    (0xFF54, 0xFF54, Mapped, "t", Unspecified),
    (0xFF55, 0xFF55, Mapped, "u", Unspecified),
    (0xFF56, 0xFF56, Mapped, "v", Unspecified),
    (0xFF57, 0xFF57, Mapped, "w", Unspecified),
    (0xFF58, 0xFF58, Mapped, "x", Unspecified),
    (0xFF59, 0xFF59, Mapped, "y", Unspecified),
    (0xFF5A, 0xFF5A, Mapped, "z", Unspecified),
    (0xFF5B, 0xFF5B, DisallowedStd3Mapped, "{", Unspecified),
    (0xFF5C, 0xFF5C, DisallowedStd3Mapped, "|", Unspecified),
    (0xFF5D, 0xFF5D, DisallowedStd3Mapped, "}", Unspecified),
    (0xFF5E, 0xFF5E, DisallowedStd3Mapped, "~", Unspecified),
    (0xFF5F, 0xFF5F, Mapped, "\u{2985}", Unspecified),
    (0xFF60, 0xFF60, Mapped, "\u{2986}", Unspecified),
    (0xFF61, 0xFF61, Mapped, ".", Unspecified),
    (0xFF62, 0xFF62, Mapped, "\u{300C}", Unspecified),
    (0xFF63, 0xFF63, Mapped, "\u{300D}", Unspecified),
    (0xFF64, 0xFF64, Mapped, "\u{3001}", Unspecified),
    (0xFF65, 0xFF65, Mapped, "\u{30FB}", Unspecified),
    (0xFF66, 0xFF66, Mapped, "\u{30F2}", Unspecified),
    (0xFF67, 0xFF67, Mapped, "\u{30A1}", Unspecified),
    (0xFF68, 0xFF68, Mapped, "\u{30A3}", Unspecified),
    (0xFF69, 0xFF69, Mapped, "\u{30A5}", Unspecified),
    (0xFF6A, 0xFF6A, Mapped, "\u{30A7}", Unspecified),
    (0xFF6B, 0xFF6B, Mapped, "\u{30A9}", Unspecified),
    (0xFF6C, 0xFF6C, Mapped, "\u{30E3}", Unspecified),
    (0xFF6D, 0xFF6D, Mapped, "\u{30E5}", Unspecified),
    (0xFF6E, 0xFF6E, Mapped, "\u{30E7}", Unspecified),
    (0xFF6F, 0xFF6F, Mapped, "\u{30C3}", Unspecified),
    (0xFF70, 0xFF70, Mapped, "\u{30FC}", Unspecified),
    (0xFF71, 0xFF71, Mapped, "\u{30A2}", Unspecified),
    (0xFF72, 0xFF72, Mapped, "\u{30A4}", Unspecified),
    (0xFF73, 0xFF73, Mapped, "\u{30A6}", Unspecified),
    (0xFF74, 0xFF74, Mapped, "\u{30A8}", Unspecified),
    (0xFF75, 0xFF75, Mapped, "\u{30AA}", Unspecified),
    (0xFF76, 0xFF76, Mapped, "\u{30AB}", Unspecified),
    (0xFF77, 0xFF77, Mapped, "\u{30AD}", Unspecified),
    (0xFF78, 0xFF78, Mapped, "\u{30AF}", Unspecified),
    (0xFF79, 0xFF79, Mapped, "\u{30B1}", Unspecified),
    (0xFF7A, 0xFF7A, Mapped, "\u{30B3}", Unspecified),
    (0xFF7B, 0xFF7B, Mapped, "\u{30B5}", Unspecified),
    (0xFF7C, 0xFF7C, Mapped, "\u{30B7}", Unspecified),
    (0xFF7D, 0xFF7D, Mapped, "\u{30B9}", Unspecified),
    (0xFF7E, 0xFF7E, Mapped, "\u{30BB}", Unspecified),
    (0xFF7F, 0xFF7F, Mapped, "\u{30BD}", Unspecified),
    (0xFF80, 0xFF80, Mapped, "\u{30BF}", Unspecified),
    (0xFF81, 0xFF81, Mapped, "\u{30C1}", Unspecified),
    (0xFF82, 0xFF82, Mapped, "\u{30C4}", Unspecified),
    (0xFF83, 0xFF83, Mapped, "\u{30C6}", Unspecified),
    (0xFF84, 0xFF84, Mapped, "\u{30C8}", Unspecified),
    (0xFF85, 0xFF85, Mapped, "\u{30CA}", Unspecified),
    (0xFF86, 0xFF86, Mapped, "\u{30CB}", Unspecified),
    (0xFF87, 0xFF87, Mapped, "\u{30CC}", Unspecified),
    (0xFF88, 0xFF88, Mapped, "\u{30CD}", Unspecified),
    (0xFF89, 0xFF89, Mapped, "\u{30CE}", Unspecified),
    (0xFF8A, 0xFF8A, Mapped, "\u{30CF}", Unspecified),
    (0xFF8B, 0xFF8B, Mapped, "\u{30D2}", Unspecified),
    (0xFF8C, 0xFF8C, Mapped, "\u{30D5}", Unspecified),
    (0xFF8D, 0xFF8D, Mapped, "\u{30D8}", Unspecified),
    (0xFF8E, 0xFF8E, Mapped, "\u{30DB}", Unspecified),
    (0xFF8F, 0xFF8F, Mapped, "\u{30DE}", Unspecified),
    (0xFF90, 0xFF90, Mapped, "\u{30DF}", Unspecified),
    (0xFF91, 0xFF91, Mapped, "\u{30E0}", Unspecified),
    (0xFF92, 0xFF92, Mapped, "\u{30E1}", Unspecified),
    (0xFF93, 0xFF93, Mapped, "\u{30E2}", Unspecified),
    (0xFF94, 0xFF94, Mapped, "\u{30E4}", Unspecified),
    (0xFF95, 0xFF95, Mapped, "\u{30E6}", Unspecified),
    (0xFF96, 0xFF96, Mapped, "\u{30E8}", Unspecified),
    (0xFF97, 0xFF97, Mapped, "\u{30E9}", Unspecified),
    (0xFF98, 0xFF98, Mapped, "\u{30EA}", Unspecified),
    (0xFF99, 0xFF99, Mapped, "\u{30EB}", Unspecified),
    (0xFF9A, 0xFF9A, Mapped, "\u{30EC}", Unspecified),
    (0xFF9B, 0xFF9B, Mapped, "\u{30ED}", Unspecified),
    (0xFF9C, 0xFF9C, Mapped, "\u{30EF}", Unspecified),
    (0xFF9D, 0xFF9D, Mapped, "\u{30F3}", Unspecified),
    (0xFF9E, 0xFF9E, Mapped, "\u{3099}", Unspecified),
    (0xFF9F, 0xFF9F, Mapped, "\u{309A}", Unspecified),
    (0xFFA0, 0xFFA0, Disallowed, "", Unspecified),
    (0xFFA1, 0xFFA1, Mapped, "\u{1100}", Unspecified),
    (0xFFA2, 0xFFA2, Mapped, "\u{1101}", Unspecified),
    (0xFFA3, 0xFFA3, Mapped, "\u{11AA}", Unspecified),
    (0xFFA4, 0xFFA4, Mapped, "\u{1102}", Unspecified),
    (0xFFA5, 0xFFA5, Mapped, "\u{11AC}", Unspecified),
    (0xFFA6, 0xFFA6, Mapped, "\u{11AD}", Unspecified),
    (0xFFA7, 0xFFA7, Mapped, "\u{1103}", Unspecified),
    (0xFFA8, 0xFFA8, Mapped, "\u{1104}", Unspecified),
    (0xFFA9, 0xFFA9, Mapped, "\u{1105}", Unspecified),
    (0xFFAA, 0xFFAA, Mapped, "\u{11B0}", Unspecified),
    (0xFFAB, 0xFFAB, Mapped, "\u{11B1}", Unspecified),
    (0xFFAC, 0xFFAC, Mapped, "\u{11B2}", Unspecified),
    (0xFFAD, 0xFFAD, Mapped, "\u{11B3}", Unspecified),
    (0xFFAE, 0xFFAE, Mapped, "\u{11B4}", Unspecified),
    (0xFFAF, 0xFFAF, Mapped, "\u{11B5}", Unspecified),
    (0xFFB0, 0xFFB0, Mapped, "\u{111A}", Unspecified),
    (0xFFB1, 0xFFB1, Mapped, "\u{1106}", Unspecified),
    (0xFFB2, 0xFFB2, Mapped, "\u{1107}", Unspecified),
    (0xFFB3, 0xFFB3, Mapped, "\u{1108}", Unspecified),
    (0xFFB4, 0xFFB4, Mapped, "\u{1121}", Unspecified),
    (0xFFB5, 0xFFB5, Mapped, "\u{1109}", Unspecified),
    (0xFFB6, 0xFFB6, Mapped, "\u{110A}", Unspecified),
    (0xFFB7, 0xFFB7, Mapped, "\u{110B}", Unspecified),
    (0xFFB8, 0xFFB8, Mapped, "\u{110C}", Unspecified),
    (0xFFB9, 0xFFB9, Mapped, "\u{110D}", Unspecified),
    (0xFFBA, 0xFFBA, Mapped, "\u{110E}", Unspecified),
    (0xFFBB, 0xFFBB, Mapped, "\u{110F}", Unspecified),
    (0xFFBC, 0xFFBC, Mapped, "\u{1110}", Unspecified),
    (0xFFBD, 0xFFBD, Mapped, "\u{1111}", Unspecified),
    (0xFFBE, 0xFFBE, Mapped, "\u{1112}", Unspecified),
    (0xFFBF, 0xFFC1, Disallowed, "", Unspecified),
    (0xFFC2, 0xFFC2, Mapped, "\u{1161}", Unspecified),
    (0xFFC3, 0xFFC3, Mapped, "\u{1162}", Unspecified),
    (0xFFC4, 0xFFC4, Mapped, "\u{1163}", Unspecified),
    (0xFFC5, 0xFFC5, Mapped, "\u{1164}", Unspecified),
    (0xFFC6, 0xFFC6, Mapped, "\u{1165}", Unspecified),
    (0xFFC7, 0xFFC7, Mapped, "\u{1166}", Unspecified),
    (0xFFC8, 0xFFC9, Disallowed, "", Unspecified),
    (0xFFCA, 0xFFCA, Mapped, "\u{1167}", Unspecified),
    (0xFFCB, 0xFFCB, Mapped, "\u{1168}", Unspecified),
    (0xFFCC, 0xFFCC, Mapped, "\u{1169}", Unspecified),
    (0xFFCD, 0xFFCD, Mapped, "\u{116A}", Unspecified),
    (0xFFCE, 0xFFCE, Mapped, "\u{116B}", Unspecified),
    (0xFFCF, 0xFFCF, Mapped, "\u{116C}", Unspecified),
    (0xFFD0, 0xFFD1, Disallowed, "", Unspecified),
    (0xFFD2, 0xFFD2, Mapped, "\u{116D}", Unspecified),
    (0xFFD3, 0xFFD3, Mapped, "\u{116E}", Unspecified),
    (0xFFD4, 0xFFD4, Mapped, "\u{116F}", Unspecified),
    (0xFFD5, 0xFFD5, Mapped, "\u{1170}", Unspecified),
    (0xFFD6, 0xFFD6, Mapped, "\u{1171}", Unspecified),
    (0xFFD7, 0xFFD7, Mapped, "\u{1172}", Unspecified),
    (0xFFD8, 0xFFD9, Disallowed, "", Unspecified),
    (0xFFDA, 0xFFDA, Mapped, "\u{1173}", Unspecified),
    (0xFFDB, 0xFFDB, Mapped, "\u{1174}", Unspecified),
    (0xFFDC, 0xFFDC, Mapped, "\u{1175}", Unspecified),
    (0xFFDD, 0xFFDF, Disallowed, "", Unspecified),
    (0xFFE0, 0xFFE0, Mapped, "\u{A2}", Unspecified),
    (0xFFE1, 0xFFE1, Mapped, "\u{A3}", Unspecified),
    (0xFFE2, 0xFFE2, Mapped, "\u{AC}", Unspecified),
    (0xFFE3, 0xFFE3, DisallowedStd3Mapped, " \u{304}", Unspecified),
    (0xFFE4, 0xFFE4, Mapped, "\u{A6}", Unspecified),
    (0xFFE5, 0xFFE5, Mapped, "\u{A5}", Unspecified),
    (0xFFE6, 0xFFE6, Mapped, "\u{20A9}", Unspecified),
    (0xFFE7, 0xFFE7, Disallowed, "", Unspecified),
    (0xFFE8, 0xFFE8, Mapped, "\u{2502}", Unspecified),
    (0xFFE9, 0xFFE9, Mapped, "\u{2190}", Unspecified),
    (0xFFEA, 0xFFEA, Mapped, "\u{2191}", Unspecified),
    (0xFFEB, 0xFFEB, Mapped, "\u{2192}", Unspecified),
    (0xFFEC, 0xFFEC, Mapped, "\u{2193}", Unspecified),
    (0xFFED, 0xFFED, Mapped, "\u{25A0}", Unspecified),
    (0xFFEE, 0xFFEE, Mapped, "\u{25CB}", Unspecified),
    (0xFFEF, 0xFFFF, Disallowed, "", Unspecified),
    (0x10000, 0x1000B, Valid, "", Unspecified),
    (0x1000C, 0x1000C, Disallowed, "", Unspecified),
    (0x1000D, 0x10026, Valid, "", Unspecified),
    (0x10027, 0x10027, Disallowed, "", Unspecified),
    (0x10028, 0x1003A, Valid, "", Unspecified),
    (0x1003B, 0x1003B, Disallowed, "", Unspecified),
    (0x1003C, 0x1003D, Valid, "", Unspecified),
    (0x1003E, 0x1003E, Disallowed, "", Unspecified),
    (0x1003F, 0x1004D, Valid, "", Unspecified),
    (0x1004E, 0x1004F, Disallowed, "", Unspecified),
    (0x10050, 0x1005D, Valid, "", Unspecified),
    (0x1005E, 0x1007F, Disallowed, "", Unspecified),
    (0x10080, 0x100FA, Valid, "", Unspecified),
    (0x100FB, 0x100FF, Disallowed, "", Unspecified),
    (0x10100, 0x10102, Valid, "", Nv8),
    (0x10103, 0x10106, Disallowed, "", Unspecified),
    (0x10107, 0x10133, Valid, "", Nv8),
    (0x10134, 0x10136, Disallowed, "", Unspecified),
    (0x10137, 0x1018E, Valid, "", Nv8),
    (0x1018F, 0x1018F, Disallowed, "", Unspecified),
    (0x10190, 0x1019C, Valid, "", Nv8),
    (0x1019D, 0x1019F, Disallowed, "", Unspecified),
    (0x101A0, 0x101A0, Valid, "", Nv8),
    (0x101A1, 0x101CF, Disallowed, "", Unspecified),
    (0x101D0, 0x101FC, Valid, "", Nv8),
    (0x101FD, 0x101FD, Valid, "", Unspecified),
    (0x101FE, 0x1027F, Disallowed, "", Unspecified),
    (0x10280, 0x1029C, Valid, "", Unspecified),
    (0x1029D, 0x1029F, Disallowed, "", Unspecified),
    (0x102A0, 0x102D0, Valid, "", Unspecified),
    (0x102D1, 0x102DF, Disallowed, "", Unspecified),
    (0x102E0, 0x102E0, Valid, "", Unspecified),
    (0x102E1, 0x102FB, Valid, "", Nv8),
    (0x102FC, 0x102FF, Disallowed, "", Unspecified),
    (0x10300, 0x1031F, Valid, "", Unspecified),
    (0x10320, 0x10323, Valid, "", Nv8),
    (0x10324, 0x1032C, Disallowed, "", Unspecified),
    (0x1032D, 0x10340, Valid, "", Unspecified),
    (0x10341, 0x10341, Valid, "", Nv8),
    (0x10342, 0x10349, Valid, "", Unspecified),
    (0x1034A, 0x1034A, Valid, "", Nv8),
    (0x1034B, 0x1034F, Disallowed, "", Unspecified),
    (0x10350, 0x1037A, Valid, "", Unspecified),
    (0x1037B, 0x1037F, Disallowed, "", Unspecified),
    (0x10380, 0x1039D, Valid, "", Unspecified),
    (0x1039E, 0x1039E, Disallowed, "", Unspecified),
    (0x1039F, 0x1039F, Valid, "", Nv8),
    (0x103A0, 0x103C3, Valid, "", Unspecified),
    (0x103C4, 0x103C7, Disallowed, "", Unspecified),
    (0x103C8, 0x103CF, Valid, "", Unspecified),
    (0x103D0, 0x103D5, Valid, "", Nv8),
    (0x103D6, 0x103FF, Disallowed, "", Unspecified),
    (0x10400, 0x10400, Mapped, "\u{10428}", Unspecified),
    (0x10401, 0x10401, Mapped, "\u{10429}", Unspecified),
    (0x10402, 0x10402, Mapped, "\u{1042A}", Unspecified),
    (0x10403, 0x10403, Mapped, "\u{1042B}", Unspecified),
    (0x10404, 0x10404, Mapped, "\u{1042C}", Unspecified),
    (0x10405, 0x10405, Mapped, "\u{1042D}", Unspecified),
    (0x10406, 0x10406, Mapped, "\u{1042E}", Unspecified),
    (0x10407, 0x10407, Mapped, "\u{1042F}", Unspecified),
    (0x10408, 0x10408, Mapped, "\u{10430}", Unspecified),
    (0x10409, 0x10409, Mapped, "\u{10431}", Unspecified),
    (0x1040A, 0x1040A, Mapped, "\u{10432}", Unspecified),
    (0x1040B, 0x1040B, Mapped, "\u{10433}", Unspecified),
    (0x1040C, 0x1040C, Mapped, "\u{10434}", Unspecified),
    (0x1040D, 0x1040D, Mapped, "\u{10435}", Unspecified),
    (0x1040E, 0x1040E, Mapped, "\u{10436}", Unspecified),
    (0x1040F, 0x1040F, Mapped, "\u{10437}", Unspecified),
    (0x10410, 0x10410, Mapped, "\u{10438}", Unspecified),
    (0x10411, 0x10411, Mapped, "\u{10439}", Unspecified),
    (0x10412, 0x10412, Mapped, "\u{1043A}", Unspecified),
    (0x10413, 0x10413, Mapped, "\u{1043B}", Unspecified),
    (0x10414, 0x10414, Mapped, "\u{1043C}", Unspecified),
    (0x10415, 0x10415, Mapped, "\u{1043D}", Unspecified),
    (0x10416, 0x10416, Mapped, "\u{1043E}", Unspecified),
    (0x10417, 0x10417, Mapped, "\u{1043F}", Unspecified),
    (0x10418, 0x10418, Mapped, "\u{10440}", Unspecified),
    (0x10419, 0x10419, Mapped, "\u{10441}", Unspecified),
    (0x1041A, 0x1041A, Mapped, "\u{10442}", Unspecified),
    (0x1041B, 0x1041B, Mapped, "\u{10443}", Unspecified),
    (0x1041C, 0x1041C, Mapped, "\u{10444}", Unspecified),
    (0x1041D, 0x1041D, Mapped, "\u{10445}", Unspecified),
    (0x1041E, 0x1041E, Mapped, "\u{10446}", Unspecified),
    (0x1041F, 0x1041F, Mapped, "\u{10447}", Unspecified),
    (0x10420, 0x10420, Mapped, "\u{10448}", Unspecified),
    (0x10421, 0x10421, Mapped, "\u{10449}", Unspecified),
    (0x10422, 0x10422, Mapped, "\u{1044A}", Unspecified),
    (0x10423, 0x10423, Mapped, "\u{1044B}", Unspecified),
    (0x10424, 0x10424, Mapped, "\u{1044C}", Unspecified),
    (0x10425, 0x10425, Mapped, "\u{1044D}", Unspecified),
    (0x10426, 0x10426, Mapped, "\u{1044E}", Unspecified),
    (0x10427, 0x10427, Mapped, "\u{1044F}", Unspecified),
    (0x10428, 0x1049D, Valid, "", Unspecified),
    (0x1049E, 0x1049F, Disallowed, "", Unspecified),
    (0x104A0, 0x104A9, Valid, "", Unspecified),
    (0x104AA, 0x104AF, Disallowed, "", Unspecified),
    (0x104B0, 0x104B0, Mapped, "\u{104D8}", Unspecified),
    (0x104B1, 0x104B1, Mapped, "\u{104D9}", Unspecified),
    (0x104B2, 0x104B2, Mapped, "\u{104DA}", Unspecified),
    (0x104B3, 0x104B3, Mapped, "\u{104DB}", Unspecified),
    (0x104B4, 0x104B4, Mapped, "\u{104DC}", Unspecified),
    (0x104B5, 0x104B5, Mapped, "\u{104DD}", Unspecified),
    (0x104B6, 0x104B6, Mapped, "\u{104DE}", Unspecified),
    (0x104B7, 0x104B7, Mapped, "\u{104DF}", Unspecified),
    (0x104B8, 0x104B8, Mapped, "\u{104E0}", Unspecified),
    (0x104B9, 0x104B9, Mapped, "\u{104E1}", Unspecified),
    (0x104BA, 0x104BA, Mapped, "\u{104E2}", Unspecified),
    (0x104BB, 0x104BB, Mapped, "\u{104E3}", Unspecified),
    (0x104BC, 0x104BC, Mapped, "\u{104E4}", Unspecified),
    (0x104BD, 0x104BD, Mapped, "\u{104E5}", Unspecified),
    (0x104BE, 0x104BE, Mapped, "\u{104E6}", Unspecified),
    (0x104BF, 0x104BF, Mapped, "\u{104E7}", Unspecified),
    (0x104C0, 0x104C0, Mapped, "\u{104E8}", Unspecified),
    (0x104C1, 0x104C1, Mapped, "\u{104E9}", Unspecified),
    (0x104C2, 0x104C2, Mapped, "\u{104EA}", Unspecified),
    (0x104C3, 0x104C3, Mapped, "\u{104EB}", Unspecified),
    (0x104C4, 0x104C4, Mapped, "\u{104EC}", Unspecified),
    (0x104C5, 0x104C5, Mapped, "\u{104ED}", Unspecified),
    (0x104C6, 0x104C6, Mapped, "\u{104EE}", Unspecified),
    (0x104C7, 0x104C7, Mapped, "\u{104EF}", Unspecified),
    (0x104C8, 0x104C8, Mapped, "\u{104F0}", Unspecified),
    (0x104C9, 0x104C9, Mapped, "\u{104F1}", Unspecified),
    (0x104CA, 0x104CA, Mapped, "\u{104F2}", Unspecified),
    (0x104CB, 0x104CB, Mapped, "\u{104F3}", Unspecified),
    (0x104CC, 0x104CC, Mapped, "\u{104F4}", Unspecified),
    (0x104CD, 0x104CD, Mapped, "\u{104F5}", Unspecified),
    (0x104CE, 0x104CE, Mapped, "\u{104F6}", Unspecified),
    (0x104CF, 0x104CF, Mapped, "\u{104F7}", Unspecified),
    (0x104D0, 0x104D0, Mapped, "\u{104F8}", Unspecified),
    (0x104D1, 0x104D1, Mapped, "\u{104F9}", Unspecified),
    (0x104D2, 0x104D2, Mapped, "\u{104FA}", Unspecified),
    (0x104D3, 0x104D3, Mapped, "\u{104FB}", Unspecified),
    (0x104D4, 0x104D7, Disallowed, "", Unspecified),
    (0x104D8, 0x104FB, Valid, "", Unspecified),
    (0x104FC, 0x104FF, Disallowed, "", Unspecified),
    (0x10500, 0x10527, Valid, "", Unspecified),
    (0x10528, 0x1052F, Disallowed, "", Unspecified),
    (0x10530, 0x10563, Valid, "", Unspecified),
    (0x10564, 0x1056E, Disallowed, "", Unspecified),
    (0x1056F, 0x1056F, Valid, "", Nv8),
    (0x10570, 0x105FF, Disallowed, "", Unspecified),
    (0x10600, 0x10736, Valid, "", Unspecified),
    (0x10737, 0x1073F, Disallowed, "", Unspecified),
    (0x10740, 0x10755, Valid, "", Unspecified),
    (0x10756, 0x1075F, Disallowed, "", Unspecified),
    (0x10760, 0x10767, Valid, "", Unspecified),
    (0x10768, 0x107FF, Disallowed, "", Unspecified),
    (0x10800, 0x10805, Valid, "", Unspecified),
    (0x10806, 0x10807, Disallowed, "", Unspecified),
    (0x10808, 0x10808, Valid, "", Unspecified),
    (0x10809, 0x10809, Disallowed, "", Unspecified),
    (0x1080A, 0x10835, Valid, "", Unspecified),
    (0x10836, 0x10836, Disallowed, "", Unspecified),
    (0x10837, 0x10838, Valid, "", Unspecified),
    (0x10839, 0x1083B, Disallowed, "", Unspecified),
    (0x1083C, 0x1083C, Valid, "", Unspecified),
    (0x1083D, 0x1083E, Disallowed, "", Unspecified),
    (0x1083F, 0x10855, Valid, "", Unspecified),
    (0x10856, 0x10856, Disallowed, "", Unspecified),
    (0x10857, 0x1085F, Valid, "", Nv8),
    (0x10860, 0x10876, Valid, "", Unspecified),
    (0x10877, 0x1087F, Valid, "", Nv8),
    (0x10880, 0x1089E, Valid, "", Unspecified),
    (0x1089F, 0x108A6, Disallowed, "", Unspecified),
    (0x108A7, 0x108AF, Valid, "", Nv8),
    (0x108B0, 0x108DF, Disallowed, "", Unspecified),
    (0x108E0, 0x108F2, Valid, "", Unspecified),
    (0x108F3, 0x108F3, Disallowed, "", Unspecified),
    (0x108F4, 0x108F5, Valid, "", Unspecified),
    (0x108F6, 0x108FA, Disallowed, "", Unspecified),
    (0x108FB, 0x108FF, Valid, "", Nv8),
    (0x10900, 0x10915, Valid, "", Unspecified),
    (0x10916, 0x1091B, Valid, "", Nv8),
    (0x1091C, 0x1091E, Disallowed, "", Unspecified),
    (0x1091F, 0x1091F, Valid, "", Nv8),
    (0x10920, 0x10939, Valid, "", Unspecified),
    (0x1093A, 0x1093E, Disallowed, "", Unspecified),
    (0x1093F, 0x1093F, Valid, "", Nv8),
    (0x10940, 0x1097F, Disallowed, "", Unspecified),
    (0x10980, 0x109B7, Valid, "", Unspecified),
    (0x109B8, 0x109BB, Disallowed, "", Unspecified),
    (0x109BC, 0x109BD, Valid, "", Nv8),
    (0x109BE, 0x109BF, Valid, "", Unspecified),
    (0x109C0, 0x109CF, Valid, "", Nv8),
    (0x109D0, 0x109D1, Disallowed, "", Unspecified),
    (0x109D2, 0x109FF, Valid, "", Nv8),
    (0x10A00, 0x10A03, Valid, "", Unspecified),
    (0x10A04, 0x10A04, Disallowed, "", Unspecified),
    (0x10A05, 0x10A06, Valid, "", Unspecified),
    (0x10A07, 0x10A0B, Disallowed, "", Unspecified),
    (0x10A0C, 0x10A13, Valid, "", Unspecified),
    (0x10A14, 0x10A14, Disallowed, "", Unspecified),
    (0x10A15, 0x10A17, Valid, "", Unspecified),
    (0x10A18, 0x10A18, Disallowed, "", Unspecified),
    (0x10A19, 0x10A35, Valid, "", Unspecified),
    (0x10A36, 0x10A37, Disallowed, "", Unspecified),
    (0x10A38, 0x10A3A, Valid, "", Unspecified),
    (0x10A3B, 0x10A3E, Disallowed, "", Unspecified),
    (0x10A3F, 0x10A3F, Valid, "", Unspecified),
    (0x10A40, 0x10A48, Valid, "", Nv8),
    (0x10A49, 0x10A4F, Disallowed, "", Unspecified),
    (0x10A50, 0x10A58, Valid, "", Nv8),
    (0x10A59, 0x10A5F, Disallowed, "", Unspecified),
    (0x10A60, 0x10A7C, Valid, "", Unspecified),
    (0x10A7D, 0x10A7F, Valid, "", Nv8),
    (0x10A80, 0x10A9C, Valid, "", Unspecified),
    (0x10A9D, 0x10A9F, Valid, "", Nv8),
    (0x10AA0, 0x10ABF, Disallowed, "", Unspecified),
    (0x10AC0, 0x10AC7, Valid, "", Unspecified),
    (0x10AC8, 0x10AC8, Valid, "", Nv8),
    (0x10AC9, 0x10AE6, Valid, "", Unspecified),
    (0x10AE7, 0x10AEA, Disallowed, "", Unspecified),
    (0x10AEB, 0x10AF6, Valid, "", Nv8),
    (0x10AF7, 0x10AFF, Disallowed, "", Unspecified),
    (0x10B00, 0x10B35, Valid, "", Unspecified),
    (0x10B36, 0x10B38, Disallowed, "", Unspecified),
    (0x10B39, 0x10B3F, Valid, "", Nv8),
    (0x10B40, 0x10B55, Valid, "", Unspecified),
    (0x10B56, 0x10B57, Disallowed, "", Unspecified),
    (0x10B58, 0x10B5F, Valid, "", Nv8),
    (0x10B60, 0x10B72, Valid, "", Unspecified),
    (0x10B73, 0x10B77, Disallowed, "", Unspecified),
    (0x10B78, 0x10B7F, Valid, "", Nv8),
    (0x10B80, 0x10B91, Valid, "", Unspecified),
    (0x10B92, 0x10B98, Disallowed, "", Unspecified),
    (0x10B99, 0x10B9C, Valid, "", Nv8),
    (0x10B9D, 0x10BA8, Disallowed, "", Unspecified),
    (0x10BA9, 0x10BAF, Valid, "", Nv8),
    (0x10BB0, 0x10BFF, Disallowed, "", Unspecified),
    (0x10C00, 0x10C48, Valid, "", Unspecified),
    (0x10C49, 0x10C7F, Disallowed, "", Unspecified),
    (0x10C80, 0x10C80, Mapped, "\u{10CC0}", Unspecified),
    (0x10C81, 0x10C81, Mapped, "\u{10CC1}", Unspecified),
    (0x10C82, 0x10C82, Mapped, "\u{10CC2}", Unspecified),
    (0x10C83, 0x10C83, Mapped, "\u{10CC3}", Unspecified),
    (0x10C84, 0x10C84, Mapped, "\u{10CC4}", Unspecified),
    (0x10C85, 0x10C85, Mapped, "\u{10CC5}", Unspecified),
    (0x10C86, 0x10C86, Mapped, "\u{10CC6}", Unspecified),
    (0x10C87, 0x10C87, Mapped, "\u{10CC7}", Unspecified),
    (0x10C88, 0x10C88, Mapped, "\u{10CC8}", Unspecified),
    (0x10C89, 0x10C89, Mapped, "\u{10CC9}", Unspecified),
    (0x10C8A, 0x10C8A, Mapped, "\u{10CCA}", Unspecified),
    (0x10C8B, 0x10C8B, Mapped, "\u{10CCB}", Unspecified),
    (0x10C8C, 0x10C8C, Mapped, "\u{10CCC}", Unspecified),
    (0x10C8D, 0x10C8D, Mapped, "\u{10CCD}", Unspecified),
    (0x10C8E, 0x10C8E, Mapped, "\u{10CCE}", Unspecified),
    (0x10C8F, 0x10C8F, Mapped, "\u{10CCF}", Unspecified),
    (0x10C90, 0x10C90, Mapped, "\u{10CD0}", Unspecified),
    (0x10C91, 0x10C91, Mapped, "\u{10CD1}", Unspecified),
    (0x10C92, 0x10C92, Mapped, "\u{10CD2}", Unspecified),
    (0x10C93, 0x10C93, Mapped, "\u{10CD3}", Unspecified),
    (0x10C94, 0x10C94, Mapped, "\u{10CD4}", Unspecified),
    (0x10C95, 0x10C95, Mapped, "\u{10CD5}", Unspecified),
    (0x10C96, 0x10C96, Mapped, "\u{10CD6}", Unspecified),
    (0x10C97, 0x10C97, Mapped, "\u{10CD7}", Unspecified),
    (0x10C98, 0x10C98, Mapped, "\u{10CD8}", Unspecified),
    (0x10C99, 0x10C99, Mapped, "\u{10CD9}", Unspecified),
    (0x10C9A, 0x10C9A, Mapped, "\u{10CDA}", Unspecified),
    (0x10C9B, 0x10C9B, Mapped, "\u{10CDB}", Unspecified),
    (0x10C9C, 0x10C9C, Mapped, "\u{10CDC}", Unspecified),
    (0x10C9D, 0x10C9D, Mapped, "\u{10CDD}", Unspecified),
    (0x10C9E, 0x10C9E, Mapped, "\u{10CDE}", Unspecified),
    (0x10C9F, 0x10C9F, Mapped, "\u{10CDF}", Unspecified),
    (0x10CA0, 0x10CA0, Mapped, "\u{10CE0}", Unspecified),
    (0x10CA1, 0x10CA1, Mapped, "\u{10CE1}", Unspecified),
    (0x10CA2, 0x10CA2, Mapped, "\u{10CE2}", Unspecified),
    (0x10CA3, 0x10CA3, Mapped, "\u{10CE3}", Unspecified),
    (0x10CA4, 0x10CA4, Mapped, "\u{10CE4}", Unspecified),
    (0x10CA5, 0x10CA5, Mapped, "\u{10CE5}", Unspecified),
    (0x10CA6, 0x10CA6, Mapped, "\u{10CE6}", Unspecified),
    (0x10CA7, 0x10CA7, Mapped, "\u{10CE7}", Unspecified),
    (0x10CA8, 0x10CA8, Mapped, "\u{10CE8}", Unspecified),
    (0x10CA9, 0x10CA9, Mapped, "\u{10CE9}", Unspecified),
    (0x10CAA, 0x10CAA, Mapped, "\u{10CEA}", Unspecified),
    (0x10CAB, 0x10CAB, Mapped, "\u{10CEB}", Unspecified),
    (0x10CAC, 0x10CAC, Mapped, "\u{10CEC}", Unspecified),
    (0x10CAD, 0x10CAD, Mapped, "\u{10CED}", Unspecified),
    (0x10CAE, 0x10CAE, Mapped, "\u{10CEE}", Unspecified),
    (0x10CAF, 0x10CAF, Mapped, "\u{10CEF}", Unspecified),
    (0x10CB0, 0x10CB0, Mapped, "\u{10CF0}", Unspecified),
    (0x10CB1, 0x10CB1, Mapped, "\u{10CF1}", Unspecified),
    (0x10CB2, 0x10CB2, Mapped, "\u{10CF2}", Unspecified),
    (0x10CB3, 0x10CBF, Disallowed, "", Unspecified),
    (0x10CC0, 0x10CF2, Valid, "", Unspecified),
    (0x10CF3, 0x10CF9, Disallowed, "", Unspecified),
    (0x10CFA, 0x10CFF, Valid, "", Nv8),
    (0x10D00, 0x10D27, Valid, "", Unspecified),
    (0x10D28, 0x10D2F, Disallowed, "", Unspecified),
    (0x10D30, 0x10D39, Valid, "", Unspecified),
    (0x10D3A, 0x10E5F, Disallowed, "", Unspecified),
    (0x10E60, 0x10E7E, Valid, "", Nv8),
    (0x10E7F, 0x10E7F, Disallowed, "", Unspecified),
    (0x10E80, 0x10EA9, Valid, "", Unspecified),
    (0x10EAA, 0x10EAA, Disallowed, "", Unspecified),
    (0x10EAB, 0x10EAC, Valid, "", Unspecified),
    (0x10EAD, 0x10EAD, Valid, "", Nv8),
    (0x10EAE, 0x10EAF, Disallowed, "", Unspecified),
    (0x10EB0, 0x10EB1, Valid, "", Unspecified),
    (0x10EB2, 0x10EFF, Disallowed, "", Unspecified),
    (0x10F00, 0x10F1C, Valid, "", Unspecified),
    (0x10F1D, 0x10F26, Valid, "", Nv8),
    (0x10F27, 0x10F27, Valid, "", Unspecified),
    (0x10F28, 0x10F2F, Disallowed, "", Unspecified),
    (0x10F30, 0x10F50, Valid, "", Unspecified),
    (0x10F51, 0x10F59, Valid, "", Nv8),
    (0x10F5A, 0x10FAF, Disallowed, "", Unspecified),
    (0x10FB0, 0x10FC4, Valid, "", Unspecified),
    (0x10FC5, 0x10FCB, Valid, "", Nv8),
    (0x10FCC, 0x10FDF, Disallowed, "", Unspecified),
    (0x10FE0, 0x10FF6, Valid, "", Unspecified),
    (0x10FF7, 0x10FFF, Disallowed, "", Unspecified),
    (0x11000, 0x11046, Valid, "", Unspecified),
    (0x11047, 0x1104D, Valid, "", Nv8),
    (0x1104E, 0x11051, Disallowed, "", Unspecified),
    (0x11052, 0x11065, Valid, "", Nv8),
    (0x11066, 0x1106F, Valid, "", Unspecified),
    (0x11070, 0x1107E, Disallowed, "", Unspecified),
    (0x1107F, 0x110BA, Valid, "", Unspecified),
    (0x110BB, 0x110BC, Valid, "", Nv8),
    (0x110BD, 0x110BD, Disallowed, "", Unspecified),
    (0x110BE, 0x110C1, Valid, "", Nv8),
    (0x110C2, 0x110CF, Disallowed, "", Unspecified),
    (0x110D0, 0x110E8, Valid, "", Unspecified),
    (0x110E9, 0x110EF, Disallowed, "", Unspecified),
    (0x110F0, 0x110F9, Valid, "", Unspecified),
    (0x110FA, 0x110FF, Disallowed, "", Unspecified),
    (0x11100, 0x11134, Valid, "", Unspecified),
    (0x11135, 0x11135, Disallowed, "", Unspecified),
    (0x11136, 0x1113F, Valid, "", Unspecified),
    (0x11140, 0x11143, Valid, "", Nv8),
    (0x11144, 0x11147, Valid, "", Unspecified),
    (0x11148, 0x1114F, Disallowed, "", Unspecified),
    (0x11150, 0x11173, Valid, "", Unspecified),
    (0x11174, 0x11175, Valid, "", Nv8),
    (0x11176, 0x11176, Valid, "", Unspecified),
    (0x11177, 0x1117F, Disallowed, "", Unspecified),
    (0x11180, 0x111C4, Valid, "", Unspecified),
    (0x111C5, 0x111C8, Valid, "", Nv8),
    (0x111C9, 0x111CC, Valid, "", Unspecified),
    (0x111CD, 0x111CD, Valid, "", Nv8),
    (0x111CE, 0x111DA, Valid, "", Unspecified),
    (0x111DB, 0x111DB, Valid, "", Nv8),
    (0x111DC, 0x111DC, Valid, "", Unspecified),
    (0x111DD, 0x111DF, Valid, "", Nv8),
    (0x111E0, 0x111E0, Disallowed, "", Unspecified),
    (0x111E1, 0x111F4, Valid, "", Nv8),
    (0x111F5, 0x111FF, Disallowed, "", Unspecified),
    (0x11200, 0x11211, Valid, "", Unspecified),
    (0x11212, 0x11212, Disallowed, "", Unspecified),
    (0x11213, 0x11237, Valid, "", Unspecified),
    (0x11238, 0x1123D, Valid, "", Nv8),
    (0x1123E, 0x1123E, Valid, "", Unspecified),
    (0x1123F, 0x1127F, Disallowed, "", Unspecified),
    (0x11280, 0x11286, Valid, "", Unspecified),
    (0x11287, 0x11287, Disallowed, "", Unspecified),
    (0x11288, 0x11288, Valid, "", Unspecified),
    (0x11289, 0x11289, Disallowed, "", Unspecified),
    (0x1128A, 0x1128D, Valid, "", Unspecified),
    (0x1128E, 0x1128E, Disallowed, "", Unspecified),
    (0x1128F, 0x1129D, Valid, "", Unspecified),
    (0x1129E, 0x1129E, Disallowed, "", Unspecified),
    (0x1129F, 0x112A8, Valid, "", Unspecified),
    (0x112A9, 0x112A9, Valid, "", Nv8),
    (0x112AA, 0x112AF, Disallowed, "", Unspecified),
    (0x112B0, 0x112EA, Valid, "", Unspecified),
    (0x112EB, 0x112EF, Disallowed, "", Unspecified),
    (0x112F0, 0x112F9, Valid, "", Unspecified),
    (0x112FA, 0x112FF, Disallowed, "", Unspecified),
    (0x11300, 0x11303, Valid, "", Unspecified),
    (0x11304, 0x11304, Disallowed, "", Unspecified),
    (0x11305, 0x1130C, Valid, "", Unspecified),
    (0x1130D, 0x1130E, Disallowed, "", Unspecified),
    (0x1130F, 0x11310, Valid, "", Unspecified),
    (0x11311, 0x11312, Disallowed, "", Unspecified),
    (0x11313, 0x11328, Valid, "", Unspecified),
    (0x11329, 0x11329, Disallowed, "", Unspecified),
    (0x1132A, 0x11330, Valid, "", Unspecified),
    (0x11331, 0x11331, Disallowed, "", Unspecified),
    (0x11332, 0x11333, Valid, "", Unspecified),
    (0x11334, 0x11334, Disallowed, "", Unspecified),
    (0x11335, 0x11339, Valid, "", Unspecified),
    (0x1133A, 0x1133A, Disallowed, "", Unspecified),
    (0x1133B, 0x11344, Valid, "", Unspecified),
    (0x11345, 0x11346, Disallowed, "", Unspecified),
    (0x11347, 0x11348, Valid, "", Unspecified),
    (0x11349, 0x1134A, Disallowed, "", Unspecified),
    (0x1134B, 0x1134D, Valid, "", Unspecified),
    (0x1134E, 0x1134F, Disallowed, "", Unspecified),
    (0x11350, 0x11350, Valid, "", Unspecified),
    (0x11351, 0x11356, Disallowed, "", Unspecified),
    (0x11357, 0x11357, Valid, "", Unspecified),
    (0x11358, 0x1135C, Disallowed, "", Unspecified),
    (0x1135D, 0x11363, Valid, "", Unspecified),
    (0x11364, 0x11365, Disallowed, "", Unspecified),
    (0x11366, 0x1136C, Valid, "", Unspecified),
    (0x1136D, 0x1136F, Disallowed, "", Unspecified),
    (0x11370, 0x11374, Valid, "", Unspecified),
    (0x11375, 0x113FF, Disallowed, "", Unspecified),
    (0x11400, 0x1144A, Valid, "", Unspecified),
    (0x1144B, 0x1144F, Valid, "", Nv8),
    (0x11450, 0x11459, Valid, "", Unspecified),
    (0x1145A, 0x1145B, Valid, "", Nv8),
    (0x1145C, 0x1145C, Disallowed, "", Unspecified),
    (0x1145D, 0x1145D, Valid, "", Nv8),
    (0x1145E, 0x11461, Valid, "", Unspecified),
    (0x11462, 0x1147F, Disallowed, "", Unspecified),
    (0x11480, 0x114C5, Valid, "", Unspecified),
    (0x114C6, 0x114C6, Valid, "", Nv8),
    (0x114C7, 0x114C7, Valid, "", Unspecified),
    (0x114C8, 0x114CF, Disallowed, "", Unspecified),
    (0x114D0, 0x114D9, Valid, "", Unspecified),
    (0x114DA, 0x1157F, Disallowed, "", Unspecified),
    (0x11580, 0x115B5, Valid, "", Unspecified),
    (0x115B6, 0x115B7, Disallowed, "", Unspecified),
    (0x115B8, 0x115C0, Valid, "", Unspecified),
    (0x115C1, 0x115D7, Valid, "", Nv8),
    (0x115D8, 0x115DD, Valid, "", Unspecified),
    (0x115DE, 0x115FF, Disallowed, "", Unspecified),
    (0x11600, 0x11640, Valid, "", Unspecified),
    (0x11641, 0x11643, Valid, "", Nv8),
    (0x11644, 0x11644, Valid, "", Unspecified),
    (0x11645, 0x1164F, Disallowed, "", Unspecified),
    (0x11650, 0x11659, Valid, "", Unspecified),
    (0x1165A, 0x1165F, Disallowed, "", Unspecified),
    (0x11660, 0x1166C, Valid, "", Nv8),
    (0x1166D, 0x1167F, Disallowed, "", Unspecified),
    (0x11680, 0x116B8, Valid, "", Unspecified),
    (0x116B9, 0x116BF, Disallowed, "", Unspecified),
    (0x116C0, 0x116C9, Valid, "", Unspecified),
    (0x116CA, 0x116FF, Disallowed, "", Unspecified),
    (0x11700, 0x1171A, Valid, "", Unspecified),
    (0x1171B, 0x1171C, Disallowed, "", Unspecified),
    (0x1171D, 0x1172B, Valid, "", Unspecified),
    (0x1172C, 0x1172F, Disallowed, "", Unspecified),
    (0x11730, 0x11739, Valid, "", Unspecified),
    (0x1173A, 0x1173F, Valid, "", Nv8),
    (0x11740, 0x117FF, Disallowed, "", Unspecified),
    (0x11800, 0x1183A, Valid, "", Unspecified),
    (0x1183B, 0x1183B, Valid, "", Nv8),
    (0x1183C, 0x1189F, Disallowed, "", Unspecified),
    (0x118A0, 0x118A0, Mapped, "\u{118C0}", Unspecified),
    (0x118A1, 0x118A1, Mapped, "\u{118C1}", Unspecified),
    (0x118A2, 0x118A2, Mapped, "\u{118C2}", Unspecified),
    (0x118A3, 0x118A3, Mapped, "\u{118C3}", Unspecified),
    (0x118A4, 0x118A4, Mapped, "\u{118C4}", Unspecified),
    (0x118A5, 0x118A5, Mapped, "\u{118C5}", Unspecified),
    (0x118A6, 0x118A6, Mapped, "\u{118C6}", Unspecified),
    (0x118A7, 0x118A7, Mapped, "\u{118C7}", Unspecified),
    (0x118A8, 0x118A8, Mapped, "\u{118C8}", Unspecified),
    (0x118A9, 0x118A9, Mapped, "\u{118C9}", Unspecified),
    (0x118AA, 0x118AA, Mapped, "\u{118CA}", Unspecified),
    (0x118AB, 0x118AB, Mapped, "\u{118CB}", Unspecified),
    (0x118AC, 0x118AC, Mapped, "\u{118CC}", Unspecified),
    (0x118AD, 0x118AD, Mapped, "\u{118CD}", Unspecified),
    (0x118AE, 0x118AE, Mapped, "\u{118CE}", Unspecified),
    (0x118AF, 0x118AF, Mapped, "\u{118CF}", Unspecified),
    (0x118B0, 0x118B0, Mapped, "\u{118D0}", Unspecified),
    (0x118B1, 0x118B1, Mapped, "\u{118D1}", Unspecified),
    (0x118B2, 0x118B2, Mapped, "\u{118D2}", Unspecified),
    (0x118B3, 0x118B3, Mapped, "\u{118D3}", Unspecified),
    (0x118B4, 0x118B4, Mapped, "\u{118D4}", Unspecified),
    (0x118B5, 0x118B5, Mapped, "\u{118D5}", Unspecified),
    (0x118B6, 0x118B6, Mapped, "\u{118D6}", Unspecified),
    (0x118B7, 0x118B7, Mapped, "\u{118D7}", Unspecified),
    (0x118B8, 0x118B8, Mapped, "\u{118D8}", Unspecified),
    (0x118B9, 0x118B9, Mapped, "\u{118D9}", Unspecified),
    (0x118BA, 0x118BA, Mapped, "\u{118DA}", Unspecified),
    (0x118BB, 0x118BB, Mapped, "\u{118DB}", Unspecified),
    (0x118BC, 0x118BC, Mapped, "\u{118DC}", Unspecified),
    (0x118BD, 0x118BD, Mapped, "\u{118DD}", Unspecified),
    (0x118BE, 0x118BE, Mapped, "\u{118DE}", Unspecified),
    (0x118BF, 0x118BF, Mapped, "\u{118DF}", Unspecified),
    (0x118C0, 0x118E9, Valid, "", Unspecified),
    (0x118EA, 0x118F2, Valid, "", Nv8),
    (0x118F3, 0x118FE, Disallowed, "", Unspecified),
    (0x118FF, 0x11906, Valid, "", Unspecified),
    (0x11907, 0x11908, Disallowed, "", Unspecified),
    (0x11909, 0x11909, Valid, "", Unspecified),
    (0x1190A, 0x1190B, Disallowed, "", Unspecified),
    (0x1190C, 0x11913, Valid, "", Unspecified),
    (0x11914, 0x11914, Disallowed, "", Unspecified),
    (0x11915, 0x11916, Valid, "", Unspecified),
    (0x11917, 0x11917, Disallowed, "", Unspecified),
    (0x11918, 0x11935, Valid, "", Unspecified),
    (0x11936, 0x11936, Disallowed, "", Unspecified),
    (0x11937, 0x11938, Valid, "", Unspecified),
    (0x11939, 0x1193A, Disallowed, "", Unspecified),
    (0x1193B, 0x11943, Valid, "", Unspecified),
    (0x11944, 0x11946, Valid, "", Nv8),
    (0x11947, 0x1194F, Disallowed, "", Unspecified),
    (0x11950, 0x11959, Valid, "", Unspecified),
    (0x1195A, 0x1199F, Disallowed, "", Unspecified),
    (0x119A0, 0x119A7, Valid, "", Unspecified),
    (0x119A8, 0x119A9, Disallowed, "", Unspecified),
    (0x119AA, 0x119D7, Valid, "", Unspecified),
    (0x119D8, 0x119D9, Disallowed, "", Unspecified),
    (0x119DA, 0x119E1, Valid, "", Unspecified),
    (0x119E2, 0x119E2, Valid, "", Nv8),
    (0x119E3, 0x119E4, Valid, "", Unspecified),
    (0x119E5, 0x119FF, Disallowed, "", Unspecified),
    (0x11A00, 0x11A3E, Valid, "", Unspecified),
    (0x11A3F, 0x11A46, Valid, "", Nv8),
    (0x11A47, 0x11A47, Valid, "", Unspecified),
    (0x11A48, 0x11A4F, Disallowed, "", Unspecified),
    (0x11A50, 0x11A99, Valid, "", Unspecified),
    (0x11A9A, 0x11A9C, Valid, "", Nv8),
    (0x11A9D, 0x11A9D, Valid, "", Unspecified),
    (0x11A9E, 0x11AA2, Valid, "", Nv8),
    (0x11AA3, 0x11ABF, Disallowed, "", Unspecified),
    (0x11AC0, 0x11AF8, Valid, "", Unspecified),
    (0x11AF9, 0x11BFF, Disallowed, "", Unspecified),
    (0x11C00, 0x11C08, Valid, "", Unspecified),
    (0x11C09, 0x11C09, Disallowed, "", Unspecified),
    (0x11C0A, 0x11C36, Valid, "", Unspecified),
    (0x11C37, 0x11C37, Disallowed, "", Unspecified),
    (0x11C38, 0x11C40, Valid, "", Unspecified),
    (0x11C41, 0x11C45, Valid, "", Nv8),
    (0x11C46, 0x11C4F, Disallowed, "", Unspecified),
    (0x11C50, 0x11C59, Valid, "", Unspecified),
    (0x11C5A, 0x11C6C, Valid, "", Nv8),
    (0x11C6D, 0x11C6F, Disallowed, "", Unspecified),
    (0x11C70, 0x11C71, Valid, "", Nv8),
    (0x11C72, 0x11C8F, Valid, "", Unspecified),
    (0x11C90, 0x11C91, Disallowed, "", Unspecified),
    (0x11C92, 0x11CA7, Valid, "", Unspecified),
    (0x11CA8, 0x11CA8, Disallowed, "", Unspecified),
    (0x11CA9, 0x11CB6, Valid, "", Unspecified),
    (0x11CB7, 0x11CFF, Disallowed, "", Unspecified),
    (0x11D00, 0x11D06, Valid, "", Unspecified),
    (0x11D07, 0x11D07, Disallowed, "", Unspecified),
    (0x11D08, 0x11D09, Valid, "", Unspecified),
    (0x11D0A, 0x11D0A, Disallowed, "", Unspecified),
    (0x11D0B, 0x11D36, Valid, "", Unspecified),
    (0x11D37, 0x11D39, Disallowed, "", Unspecified),
    (0x11D3A, 0x11D3A, Valid, "", Unspecified),
    (0x11D3B, 0x11D3B, Disallowed, "", Unspecified),
    (0x11D3C, 0x11D3D, Valid, "", Unspecified),
    (0x11D3E, 0x11D3E, Disallowed, "", Unspecified),
    (0x11D3F, 0x11D47, Valid, "", Unspecified),
    (0x11D48, 0x11D4F, Disallowed, "", Unspecified),
    (0x11D50, 0x11D59, Valid, "", Unspecified),
    (0x11D5A, 0x11D5F, Disallowed, "", Unspecified),
    (0x11D60, 0x11D65, Valid, "", Unspecified),
    (0x11D66, 0x11D66, Disallowed, "", Unspecified),
    (0x11D67, 0x11D68, Valid, "", Unspecified),
    (0x11D69, 0x11D69, Disallowed, "", Unspecified),
    (0x11D6A, 0x11D8E, Valid, "", Unspecified),
    (0x11D8F, 0x11D8F, Disallowed, "", Unspecified),
    (0x11D90, 0x11D91, Valid, "", Unspecified),
    (0x11D92, 0x11D92, Disallowed, "", Unspecified),
    (0x11D93, 0x11D98, Valid, "", Unspecified),
    (0x11D99, 0x11D9F, Disallowed, "", Unspecified),
    (0x11DA0, 0x11DA9, Valid, "", Unspecified),
    (0x11DAA, 0x11EDF, Disallowed, "", Unspecified),
    (0x11EE0, 0x11EF6, Valid, "", Unspecified),
    (0x11EF7, 0x11EF8, Valid, "", Nv8),
    (0x11EF9, 0x11FAF, Disallowed, "", Unspecified),
    (0x11FB0, 0x11FB0, Valid, "", Unspecified),
    (0x11FB1, 0x11FBF, Disallowed, "", Unspecified),
    (0x11FC0, 0x11FF1, Valid, "", Nv8),
    (0x11FF2, 0x11FFE, Disallowed, "", Unspecified),
    (0x11FFF, 0x11FFF, Valid, "", Nv8),
    (0x12000, 0x12399, Valid, "", Unspecified),
    (0x1239A, 0x123FF, Disallowed, "", Unspecified),
    (0x12400, 0x1246E, Valid, "", Nv8),
    (0x1246F, 0x1246F, Disallowed, "", Unspecified),
    (0x12470, 0x12474, Valid, "", Nv8),
    (0x12475, 0x1247F, Disallowed, "", Unspecified),
    (0x12480, 0x12543, Valid, "", Unspecified),
    (0x12544, 0x12FFF, Disallowed, "", Unspecified),
    (0x13000, 0x1342E, Valid, "", Unspecified),
    (0x1342F, 0x143FF, Disallowed, "", Unspecified),
    (0x14400, 0x14646, Valid, "", Unspecified),
    (0x14647, 0x167FF, Disallowed, "", Unspecified),
    (0x16800, 0x16A38, Valid, "", Unspecified),
    (0x16A39, 0x16A3F, Disallowed, "", Unspecified),
    (0x16A40, 0x16A5E, Valid, "", Unspecified),
    (0x16A5F, 0x16A5F, Disallowed, "", Unspecified),
    (0x16A60, 0x16A69, Valid, "", Unspecified),
    (0x16A6A, 0x16A6D, Disallowed, "", Unspecified),
    (0x16A6E, 0x16A6F, Valid, "", Nv8),
    (0x16A70, 0x16ACF, Disallowed, "", Unspecified),
    (0x16AD0, 0x16AED, Valid, "", Unspecified),
    (0x16AEE, 0x16AEF, Disallowed, "", Unspecified),
    (0x16AF0, 0x16AF4, Valid, "", Unspecified),
    (0x16AF5, 0x16AF5, Valid, "", Nv8),
    (0x16AF6, 0x16AFF, Disallowed, "", Unspecified),
    (0x16B00, 0x16B36, Valid, "", Unspecified),
    (0x16B37, 0x16B3F, Valid, "", Nv8),
    (0x16B40, 0x16B43, Valid, "", Unspecified),
    (0x16B44, 0x16B45, Valid, "", Nv8),
    (0x16B46, 0x16B4F, Disallowed, "", Unspecified),
    (0x16B50, 0x16B59, Valid, "", Unspecified),
    (0x16B5A, 0x16B5A, Disallowed, "", Unspecified),
    (0x16B5B, 0x16B61, Valid, "", Nv8),
    (0x16B62, 0x16B62, Disallowed, "", Unspecified),
    (0x16B63, 0x16B77, Valid, "", Unspecified),
    (0x16B78, 0x16B7C, Disallowed, "", Unspecified),
    (0x16B7D, 0x16B8F, Valid, "", Unspecified),
    (0x16B90, 0x16E3F, Disallowed, "", Unspecified),
    (0x16E40, 0x16E40, Mapped, "\u{16E60}", Unspecified),
    (0x16E41, 0x16E41, Mapped, "\u{16E61}", Unspecified),
    (0x16E42, 0x16E42, Mapped, "\u{16E62}", Unspecified),
    (0x16E43, 0x16E43, Mapped, "\u{16E63}", Unspecified),
    (0x16E44, 0x16E44, Mapped, "\u{16E64}", Unspecified),
    (0x16E45, 0x16E45, Mapped, "\u{16E65}", Unspecified),
    (0x16E46, 0x16E46, Mapped, "\u{16E66}", Unspecified),
    (0x16E47, 0x16E47, Mapped, "\u{16E67}", Unspecified),
    (0x16E48, 0x16E48, Mapped, "\u{16E68}", Unspecified),
    (0x16E49, 0x16E49, Mapped, "\u{16E69}", Unspecified),
    (0x16E4A, 0x16E4A, Mapped, "\u{16E6A}", Unspecified),
    (0x16E4B, 0x16E4B, Mapped, "\u{16E6B}", Unspecified),
    (0x16E4C, 0x16E4C, Mapped, "\u{16E6C}", Unspecified),
    (0x16E4D, 0x16E4D, Mapped, "\u{16E6D}", Unspecified),
    (0x16E4E, 0x16E4E, Mapped, "\u{16E6E}", Unspecified),
    (0x16E4F, 0x16E4F, Mapped, "\u{16E6F}", Unspecified),
    (0x16E50, 0x16E50, Mapped, "\u{16E70}", Unspecified),
    (0x16E51, 0x16E51, Mapped, "\u{16E71}", Unspecified),
    (0x16E52, 0x16E52, Mapped, "\u{16E72}", Unspecified),
    (0x16E53, 0x16E53, Mapped, "\u{16E73}", Unspecified),
    (0x16E54, 0x16E54, Mapped, "\u{16E74}", Unspecified),
    (0x16E55, 0x16E55, Mapped, "\u{16E75}", Unspecified),
    (0x16E56, 0x16E56, Mapped, "\u{16E76}", Unspecified),
    (0x16E57, 0x16E57, Mapped, "\u{16E77}", Unspecified),
    (0x16E58, 0x16E58, Mapped, "\u{16E78}", Unspecified),
    (0x16E59, 0x16E59, Mapped, "\u{16E79}", Unspecified),
    (0x16E5A, 0x16E5A, Mapped, "\u{16E7A}", Unspecified),
    (0x16E5B, 0x16E5B, Mapped, "\u{16E7B}", Unspecified),
    (0x16E5C, 0x16E5C, Mapped, "\u{16E7C}", Unspecified),
    (0x16E5D, 0x16E5D, Mapped, "\u{16E7D}", Unspecified),
    (0x16E5E, 0x16E5E, Mapped, "\u{16E7E}", Unspecified),
    (0x16E5F, 0x16E5F, Mapped, "\u{16E7F}", Unspecified),
    (0x16E60, 0x16E7F, Valid, "", Unspecified),
    (0x16E80, 0x16E9A, Valid, "", Nv8),
    (0x16E9B, 0x16EFF, Disallowed, "", Unspecified),
    (0x16F00, 0x16F4A, Valid, "", Unspecified),
    (0x16F4B, 0x16F4E, Disallowed, "", Unspecified),
    (0x16F4F, 0x16F87, Valid, "", Unspecified),
    (0x16F88, 0x16F8E, Disallowed, "", Unspecified),
    (0x16F8F, 0x16F9F, Valid, "", Unspecified),
    (0x16FA0, 0x16FDF, Disallowed, "", Unspecified),
    (0x16FE0, 0x16FE1, Valid, "", Unspecified),
    (0x16FE2, 0x16FE2, Valid, "", Nv8),
    (0x16FE3, 0x16FE4, Valid, "", Unspecified),
    (0x16FE5, 0x16FEF, Disallowed, "", Unspecified),
    (0x16FF0, 0x16FF1, Valid, "", Unspecified),
    (0x16FF2, 0x16FFF, Disallowed, "", Unspecified),
    (0x17000, 0x187F7, Valid, "", Unspecified),
    (0x187F8, 0x187FF, Disallowed, "", Unspecified),
    (0x18800, 0x18CD5, Valid, "", Unspecified),
    (0x18CD6, 0x18CFF, Disallowed, "", Unspecified),
    (0x18D00, 0x18D08, Valid, "", Unspecified),
    (0x18D09, 0x1AFFF, Disallowed, "", Unspecified),
    (0x1B000, 0x1B11E, Valid, "", Unspecified),
    (0x1B11F, 0x1B14F, Disallowed, "", Unspecified),
    (0x1B150, 0x1B152, Valid, "", Unspecified),
    (0x1B153, 0x1B163, Disallowed, "", Unspecified),
    (0x1B164, 0x1B167, Valid, "", Unspecified),
    (0x1B168, 0x1B16F, Disallowed, "", Unspecified),
    (0x1B170, 0x1B2FB, Valid, "", Unspecified),
    (0x1B2FC, 0x1BBFF, Disallowed, "", Unspecified),
    (0x1BC00, 0x1BC6A, Valid, "", Unspecified),
    (0x1BC6B, 0x1BC6F, Disallowed, "", Unspecified),
    (0x1BC70, 0x1BC7C, Valid, "", Unspecified),
    (0x1BC7D, 0x1BC7F, Disallowed, "", Unspecified),
    (0x1BC80, 0x1BC88, Valid, "", Unspecified),
    (0x1BC89, 0x1BC8F, Disallowed, "", Unspecified),
    (0x1BC90, 0x1BC99, Valid, "", Unspecified),
    (0x1BC9A, 0x1BC9B, Disallowed, "", Unspecified),
    (0x1BC9C, 0x1BC9C, Valid, "", Nv8),
    (0x1BC9D, 0x1BC9E, Valid, "", Unspecified),
    (0x1BC9F, 0x1BC9F, Valid, "", Nv8),
    (0x1BCA0, 0x1BCA3, Ignored, "", Unspecified),
    (0x1BCA4, 0x1CFFF, Disallowed, "", Unspecified),
    (0x1D000, 0x1D0F5, Valid, "", Nv8),
    (0x1D0F6, 0x1D0FF, Disallowed, "", Unspecified),
    (0x1D100, 0x1D126, Valid, "", Nv8),
    (0x1D127, 0x1D128, Disallowed, "", Unspecified),
    (0x1D129, 0x1D15D, Valid, "", Nv8),
    (0x1D15E, 0x1D15E, Mapped, "\u{1D157}\u{1D165}", Unspecified),
    (0x1D15F, 0x1D15F, Mapped, "\u{1D158}\u{1D165}", Unspecified),
    (0x1D160, 0x1D160, Mapped, "\u{1D158}\u{1D165}\u{1D16E}", Unspecified),
    (0x1D161, 0x1D161, Mapped, "\u{1D158}\u{1D165}\u{1D16F}", Unspecified),
    (0x1D162, 0x1D162, Mapped, "\u{1D158}\u{1D165}\u{1D170}", Unspecified),
    (0x1D163, 0x1D163, Mapped, "\u{1D158}\u{1D165}\u{1D171}", Unspecified),
    (0x1D164, 0x1D164, Mapped, "\u{1D158}\u{1D165}\u{1D172}", Unspecified),
    (0x1D165, 0x1D172, Valid, "", Nv8),
    (0x1D173, 0x1D17A, Disallowed, "", Unspecified),
    (0x1D17B, 0x1D1BA, Valid, "", Nv8),
    (0x1D1BB, 0x1D1BB, Mapped, "\u{1D1B9}\u{1D165}", Unspecified),
    (0x1D1BC, 0x1D1BC, Mapped, "\u{1D1BA}\u{1D165}", Unspecified),
    (0x1D1BD, 0x1D1BD, Mapped, "\u{1D1B9}\u{1D165}\u{1D16E}", Unspecified),
    (0x1D1BE, 0x1D1BE, Mapped, "\u{1D1BA}\u{1D165}\u{1D16E}", Unspecified),
    (0x1D1BF, 0x1D1BF, Mapped, "\u{1D1B9}\u{1D165}\u{1D16F}", Unspecified),
    (0x1D1C0, 0x1D1C0, Mapped, "\u{1D1BA}\u{1D165}\u{1D16F}", Unspecified),
    (0x1D1C1, 0x1D1E8, Valid, "", Nv8),
    (0x1D1E9, 0x1D1FF, Disallowed, "", Unspecified),
    (0x1D200, 0x1D245, Valid, "", Nv8),
    (0x1D246, 0x1D2DF, Disallowed, "", Unspecified),
    (0x1D2E0, 0x1D2F3, Valid, "", Nv8),
    (0x1D2F4, 0x1D2FF, Disallowed, "", Unspecified),
    (0x1D300, 0x1D356, Valid, "", Nv8),
    (0x1D357, 0x1D35F, Disallowed, "", Unspecified),
    (0x1D360, 0x1D378, Valid, "", Nv8),
    (0x1D379, 0x1D3FF, Disallowed, "", Unspecified),
    (0x1D400, 0x1D400, Mapped, "a", Unspecified),
    (0x1D401, 0x1D401, Mapped, "b", Unspecified),
    (0x1D402, 0x1D402, Mapped, "c", Unspecified),
    (0x1D403, 0x1D403, Mapped, "d", Unspecified),
    (0x1D404, 0x1D404, Mapped, "e", Unspecified),
    (0x1D405, 0x1D405, Mapped, "f", Unspecified),
    (0x1D406, 0x1D406, Mapped, "g", Unspecified),
    (0x1D407, 0x1D407, Mapped, "h", Unspecified),
    (0x1D408, 0x1D408, Mapped, "i", Unspecified),
    (0x1D409, 0x1D409, Mapped, "j", Unspecified),
    (0x1D40A, 0x1D40A, Mapped, "k", Unspecified),
    (0x1D40B, 0x1D40B, Mapped, "l", Unspecified),
    (0x1D40C, 0x1D40C, Mapped, "m", Unspecified),
    (0x1D40D, 0x1D40D, Mapped, "n", Unspecified),
    (0x1D40E, 0x1D40E, Mapped, "o", Unspecified),
    (0x1D40F, 0x1D40F, Mapped, "p", Unspecified),
    (0x1D410, 0x1D410, Mapped, "q", Unspecified),
    (0x1D411, 0x1D411, Mapped, "r", Unspecified),
    (0x1D412, 0x1D412, Mapped, "s", Unspecified),
    (0x1D413, 0x1D413, Mapped, "t", Unspecified),
    (0x1D414, 0x1D414, Mapped, "u", Unspecified),
    (0x1D415, 0x1D415, Mapped, "v", Unspecified),
    (0x1D416, 0x1D416, Mapped, "w", Unspecified),
    (0x1D417, 0x1D417, Mapped, "x", Unspecified),
    (0x1D418, 0x1D418, Mapped, "y", Unspecified),
    (0x1D419, 0x1D419, Mapped, "z", Unspecified),
    (0x1D41A, 0x1D41A, Mapped, "a", Unspecified),
    (0x1D41B, 0x1D41B, Mapped, "b", Unspecified),
    (0x1D41C, 0x1D41C, Mapped, "c", Unspecified),
    (0x1D41D, 0x1D41D, Mapped, "d", Unspecified),
    (0x1D41E, 0x1D41E, Mapped, "e", Unspecified),
    (0x1D41F, 0x1D41F, Mapped, "f", Unspecified),
    (0x1D420, 0x1D420, Mapped, "g", Unspecified),
    (0x1D421, 0x1D421, Mapped, "h", Unspecified),
    (0x1D422, 0x1D422, Mapped, "i", Unspecified),
    (0x1D423, 0x1D423, Mapped, "j", Unspecified),
    (0x1D424, 0x1D424, Mapped, "k", Unspecified),
    (0x1D425, 0x1D425, Mapped, "l", Unspecified),
    (0x1D426, 0x1D426, Mapped, "m", Unspecified),
    (0x1D427, 0x1D427, Mapped, "n", Unspecified),
    (0x1D428, 0x1D428, Mapped, "o", Unspecified),
    (0x1D429, 0x1D429, Mapped, "p", Unspecified),
    (0x1D42A, 0x1D42A, Mapped, "q", Unspecified),
    (0x1D42B, 0x1D42B, Mapped, "r", Unspecified),
    (0x1D42C, 0x1D42C, Mapped, "s", Unspecified),
    (0x1D42D, 0x1D42D, Mapped, "t", Unspecified),
    (0x1D42E, 0x1D42E, Mapped, "u", Unspecified),
    (0x1D42F, 0x1D42F, Mapped, "v", Unspecified),
    (0x1D430, 0x1D430, Mapped, "w", Unspecified),
    (0x1D431, 0x1D431, Mapped, "x", Unspecified),
    (0x1D432, 0x1D432, Mapped, "y", Unspecified),
    (0x1D433, 0x1D433, Mapped, "z", Unspecified),
    (0x1D434, 0x1D434, Mapped, "a", Unspecified),
    (0x1D435, 0x1D435, Mapped, "b", Unspecified),
    (0x1D436, 0x1D436, Mapped, "c", Unspecified),
    (0x1D437, 0x1D437, Mapped, "d", Unspecified),
    (0x1D438, 0x1D438, Mapped, "e", Unspecified),
    (0x1D439, 0x1D439, Mapped, "f", Unspecified),
    (0x1D43A, 0x1D43A, Mapped, "g", Unspecified),
    (0x1D43B, 0x1D43B, Mapped, "h", Unspecified),
    (0x1D43C, 0x1D43C, Mapped, "i", Unspecified),
    (0x1D43D, 0x1D43D, Mapped, "j", Unspecified),
    (0x1D43E, 0x1D43E, Mapped, "k", Unspecified),
    (0x1D43F, 0x1D43F, Mapped, "l", Unspecified),
    (0x1D440, 0x1D440, Mapped, "m", Unspecified),
    (0x1D441, 0x1D441, Mapped, "n", Unspecified),
    (0x1D442, 0x1D442, Mapped, "o", Unspecified),
    (0x1D443, 0x1D443, Mapped, "p", Unspecified),
    (0x1D444, 0x1D444, Mapped, "q", Unspecified),
    (0x1D445, 0x1D445, Mapped, "r", Unspecified),
    (0x1D446, 0x1D446, Mapped, "s", Unspecified),
    (0x1D447, 0x1D447, Mapped, "t", Unspecified),
    (0x1D448, 0x1D448, Mapped, "u", Unspecified),
    (0x1D449, 0x1D449, Mapped, "v", Unspecified),
    (0x1D44A, 0x1D44A, Mapped, "w", Unspecified),
    (0x1D44B, 0x1D44B, Mapped, "x", Unspecified),
    (0x1D44C, 0x1D44C, Mapped, "y", Unspecified),
    (0x1D44D, 0x1D44D, Mapped, "z", Unspecified),
    (0x1D44E, 0x1D44E, Mapped, "a", Unspecified),
    (0x1D44F, 0x1D44F, Mapped, "b", Unspecified),
    (0x1D450, 0x1D450, Mapped, "c", Unspecified),
    (0x1D451, 0x1D451, Mapped, "d", Unspecified),
    (0x1D452, 0x1D452, Mapped, "e", Unspecified),
    (0x1D453, 0x1D453, Mapped, "f", Unspecified),
    (0x1D454, 0x1D454, Mapped, "g", Unspecified),
    (0x1D455, 0x1D455, Disallowed, "", Unspecified),
    (0x1D456, 0x1D456, Mapped, "i", Unspecified),
    (0x1D457, 0x1D457, Mapped, "j", Unspecified),
    (0x1D458, 0x1D458, Mapped, "k", Unspecified),
    (0x1D459, 0x1D459, Mapped, "l", Unspecified),
    (0x1D45A, 0x1D45A, Mapped, "m", Unspecified),
    (0x1D45B, 0x1D45B, Mapped, "n", Unspecified),
    (0x1D45C, 0x1D45C, Mapped, "o", Unspecified),
    (0x1D45D, 0x1D45D, Mapped, "p", Unspecified),
    (0x1D45E, 0x1D45E, Mapped, "q", Unspecified),
    (0x1D45F, 0x1D45F, Mapped, "r", Unspecified),
    (0x1D460, 0x1D460, Mapped, "s", Unspecified),
    (0x1D461, 0x1D461, Mapped, "t", Unspecified),
    (0x1D462, 0x1D462, Mapped, "u", Unspecified),
    (0x1D463, 0x1D463, Mapped, "v", Unspecified),
    (0x1D464, 0x1D464, Mapped, "w", Unspecified),
    (0x1D465, 0x1D465, Mapped, "x", Unspecified),
    (0x1D466, 0x1D466, Mapped, "y", Unspecified),
    (0x1D467, 0x1D467, Mapped, "z", Unspecified),
    (0x1D468, 0x1D468, Mapped, "a", Unspecified),
    (0x1D469, 0x1D469, Mapped, "b", Unspecified),
    (0x1D46A, 0x1D46A, Mapped, "c", Unspecified),
    (0x1D46B, 0x1D46B, Mapped, "d", Unspecified),
    (0x1D46C, 0x1D46C, Mapped, "e", Unspecified),
    (0x1D46D, 0x1D46D, Mapped, "f", Unspecified),
    (0x1D46E, 0x1D46E, Mapped, "g", Unspecified),
    (0x1D46F, 0x1D46F, Mapped, "h", Unspecified),
    (0x1D470, 0x1D470, Mapped, "i", Unspecified),
    (0x1D471, 0x1D471, Mapped, "j", Unspecified),
    (0x1D472, 0x1D472, Mapped, "k", Unspecified),
    (0x1D473, 0x1D473, Mapped, "l", Unspecified),
    (0x1D474, 0x1D474, Mapped, "m", Unspecified),
    (0x1D475, 0x1D475, Mapped, "n", Unspecified),
    (0x1D476, 0x1D476, Mapped, "o", Unspecified),
    (0x1D477, 0x1D477, Mapped, "p", Unspecified),
    (0x1D478, 0x1D478, Mapped, "q", Unspecified),
    (0x1D479, 0x1D479, Mapped, "r", Unspecified),
    (0x1D47A, 0x1D47A, Mapped, "s", Unspecified),
    (0x1D47B, 0x1D47B, Mapped, "t", Unspecified),
    (0x1D47C, 0x1D47C, Mapped, "u", Unspecified),
    (0x1D47D, 0x1D47D, Mapped, "v", Unspecified),
    (0x1D47E, 0x1D47E, Mapped, "w", Unspecified),
    (0x1D47F, 0x1D47F, Mapped, "x", Unspecified),
    (0x1D480, 0x1D480, Mapped, "y", Unspecified),
    (0x1D481, 0x1D481, Mapped, "z", Unspecified),
    (0x1D482, 0x1D482, Mapped, "a", Unspecified),
    (0x1D483, 0x1D483, Mapped, "b", Unspecified),
    (0x1D484, 0x1D484, Mapped, "c", Unspecified),
    (0x1D485, 0x1D485, Mapped, "d", Unspecified),
    (0x1D486, 0x1D486, Mapped, "e", Unspecified),
    (0x1D487, 0x1D487, Mapped, "f", Unspecified),
    (0x1D488, 0x1D488, Mapped, "g", Unspecified),
    (0x1D489, 0x1D489, Mapped, "h", Unspecified),
    (0x1D48A, 0x1D48A, Mapped, "i", Unspecified),
    (0x1D48B, 0x1D48B, Mapped, "j", Unspecified),
    (0x1D48C, 0x1D48C, Mapped, "k", Unspecified),
    (0x1D48D, 0x1D48D, Mapped, "l", Unspecified),
    (0x1D48E, 0x1D48E, Mapped, "m", Unspecified),
    (0x1D48F, 0x1D48F, Mapped, "n", Unspecified),
    (0x1D490, 0x1D490, Mapped, "o", Unspecified),
    (0x1D491, 0x1D491, Mapped, "p", Unspecified),
    (0x1D492, 0x1D492, Mapped, "q", Unspecified),
    (0x1D493, 0x1D493, Mapped, "r", Unspecified),
    (0x1D494, 0x1D494, Mapped, "s", Unspecified),
    (0x1D495, 0x1D495, Mapped, "t", Unspecified),
    (0x1D496, 0x1D496, Mapped, "u", Unspecified),
    (0x1D497, 0x1D497, Mapped, "v", Unspecified),
    (0x1D498, 0x1D498, Mapped, "w", Unspecified),
    (0x1D499, 0x1D499, Mapped, "x", Unspecified),
    (0x1D49A, 0x1D49A, Mapped, "y", Unspecified),
    (0x1D49B, 0x1D49B, Mapped, "z", Unspecified),
    (0x1D49C, 0x1D49C, Mapped, "a", Unspecified),
    (0x1D49D, 0x1D49D, Disallowed, "", Unspecified),
    (0x1D49E, 0x1D49E, Mapped, "c", Unspecified),
    (0x1D49F, 0x1D49F, Mapped, "d", Unspecified),
    (0x1D4A0, 0x1D4A1, Disallowed, "", Unspecified),
    (0x1D4A2, 0x1D4A2, Mapped, "g", Unspecified),
    (0x1D4A3, 0x1D4A4, Disallowed, "", Unspecified),
    (0x1D4A5, 0x1D4A5, Mapped, "j", Unspecified),
    (0x1D4A6, 0x1D4A6, Mapped, "k", Unspecified),
    (0x1D4A7, 0x1D4A8, Disallowed, "", Unspecified),
    (0x1D4A9, 0x1D4A9, Mapped, "n", Unspecified),
    (0x1D4AA, 0x1D4AA, Mapped, "o", Unspecified),
    (0x1D4AB, 0x1D4AB, Mapped, "p", Unspecified),
    (0x1D4AC, 0x1D4AC, Mapped, "q", Unspecified),
    (0x1D4AD, 0x1D4AD, Disallowed, "", Unspecified),
    (0x1D4AE, 0x1D4AE, Mapped, "s", Unspecified),
    (0x1D4AF, 0x1D4AF, Mapped, "t", Unspecified),
    (0x1D4B0, 0x1D4B0, Mapped, "u", Unspecified),
    (0x1D4B1, 0x1D4B1, Mapped, "v", Unspecified),
    (0x1D4B2, 0x1D4B2, Mapped, "w", Unspecified),
    (0x1D4B3, 0x1D4B3, Mapped, "x", Unspecified),
    (0x1D4B4, 0x1D4B4, Mapped, "y", Unspecified),
    (0x1D4B5, 0x1D4B5, Mapped, "z", Unspecified),
    (0x1D4B6, 0x1D4B6, Mapped, "a", Unspecified),
    (0x1D4B7, 0x1D4B7, Mapped, "b", Unspecified),
    (0x1D4B8, 0x1D4B8, Mapped, "c", Unspecified),
    (0x1D4B9, 0x1D4B9, Mapped, "d", Unspecified),
    (0x1D4BA, 0x1D4BA, Disallowed, "", Unspecified),
    (0x1D4BB, 0x1D4BB, Mapped, "f", Unspecified),
    (0x1D4BC, 0x1D4BC, Disallowed, "", Unspecified),
    (0x1D4BD, 0x1D4BD, Mapped, "h", Unspecified),
    (0x1D4BE, 0x1D4BE, Mapped, "i", Unspecified),
    (0x1D4BF, 0x1D4BF, Mapped, "j", Unspecified),
    (0x1D4C0, 0x1D4C0, Mapped, "k", Unspecified),
    (0x1D4C1, 0x1D4C1, Mapped, "l", Unspecified),
    (0x1D4C2, 0x1D4C2, Mapped, "m", Unspecified),
    (0x1D4C3, 0x1D4C3, Mapped, "n", Unspecified),
    (0x1D4C4, 0x1D4C4, Disallowed, "", Unspecified),
    (0x1D4C5, 0x1D4C5, Mapped, "p", Unspecified),
    (0x1D4C6, 0x1D4C6, Mapped, "q", Unspecified),
    (0x1D4C7, 0x1D4C7, Mapped, "r", Unspecified),
    (0x1D4C8, 0x1D4C8, Mapped, "s", Unspecified),
    (0x1D4C9, 0x1D4C9, Mapped, "t", Unspecified),
    (0x1D4CA, 0x1D4CA, Mapped, "u", Unspecified),
    (0x1D4CB, 0x1D4CB, Mapped, "v", Unspecified),
    (0x1D4CC, 0x1D4CC, Mapped, "w", Unspecified),
    (0x1D4CD, 0x1D4CD, Mapped, "x", Unspecified),
    (0x1D4CE, 0x1D4CE, Mapped, "y", Unspecified),
    (0x1D4CF, 0x1D4CF, Mapped, "z", Unspecified),
    (0x1D4D0, 0x1D4D0, Mapped, "a", Unspecified),
    (0x1D4D1, 0x1D4D1, Mapped, "b", Unspecified),
    (0x1D4D2, 0x1D4D2, Mapped, "c", Unspecified),
    (0x1D4D3, 0x1D4D3, Mapped, "d", Unspecified),
    (0x1D4D4, 0x1D4D4, Mapped, "e", Unspecified),
    (0x1D4D5, 0x1D4D5, Mapped, "f", Unspecified),
    (0x1D4D6, 0x1D4D6, Mapped, "g", Unspecified),
    (0x1D4D7, 0x1D4D7, Mapped, "h", Unspecified),
    (0x1D4D8, 0x1D4D8, Mapped, "i", Unspecified),
    (0x1D4D9, 0x1D4D9, Mapped, "j", Unspecified),
    (0x1D4DA, 0x1D4DA, Mapped, "k", Unspecified),
    (0x1D4DB, 0x1D4DB, Mapped, "l", Unspecified),
    (0x1D4DC, 0x1D4DC, Mapped, "m", Unspecified),
    (0x1D4DD, 0x1D4DD, Mapped, "n", Unspecified),
    (0x1D4DE, 0x1D4DE, Mapped, "o", Unspecified),
    (0x1D4DF, 0x1D4DF, Mapped, "p", Unspecified),
    (0x1D4E0, 0x1D4E0, Mapped, "q", Unspecified),
    (0x1D4E1, 0x1D4E1, Mapped, "r", Unspecified),
    (0x1D4E2, 0x1D4E2, Mapped, "s", Unspecified),
    (0x1D4E3, 0x1D4E3, Mapped, "t", Unspecified),
    (0x1D4E4, 0x1D4E4, Mapped, "u", Unspecified),
    (0x1D4E5, 0x1D4E5, Mapped, "v", Unspecified),
    (0x1D4E6, 0x1D4E6, Mapped, "w", Unspecified),
    (0x1D4E7, 0x1D4E7, Mapped, "x", Unspecified),
    (0x1D4E8, 0x1D4E8, Mapped, "y", Unspecified),
    (0x1D4E9, 0x1D4E9, Mapped, "z", Unspecified),
    (0x1D4EA, 0x1D4EA, Mapped, "a", Unspecified),
    (0x1D4EB, 0x1D4EB, Mapped, "b", Unspecified),
    (0x1D4EC, 0x1D4EC, Mapped, "c", Unspecified),
    (0x1D4ED, 0x1D4ED, Mapped, "d", Unspecified),
    (0x1D4EE, 0x1D4EE, Mapped, "e", Unspecified),
    (0x1D4EF, 0x1D4EF, Mapped, "f", Unspecified),
    (0x1D4F0, 0x1D4F0, Mapped, "g", Unspecified),
    (0x1D4F1, 0x1D4F1, Mapped, "h", Unspecified),
    (0x1D4F2, 0x1D4F2, Mapped, "i", Unspecified),
    (0x1D4F3, 0x1D4F3, Mapped, "j", Unspecified),
    (0x1D4F4, 0x1D4F4, Mapped, "k", Unspecified),
    (0x1D4F5, 0x1D4F5, Mapped, "l", Unspecified),
    (0x1D4F6, 0x1D4F6, Mapped, "m", Unspecified),
    (0x1D4F7, 0x1D4F7, Mapped, "n", Unspecified),
    (0x1D4F8, 0x1D4F8, Mapped, "o", Unspecified),
    (0x1D4F9, 0x1D4F9, Mapped, "p", Unspecified),
    (0x1D4FA, 0x1D4FA, Mapped, "q", Unspecified),
    (0x1D4FB, 0x1D4FB, Mapped, "r", Unspecified),
    (0x1D4FC, 0x1D4FC, Mapped, "s", Unspecified),
    (0x1D4FD, 0x1D4FD, Mapped, "t", Unspecified),
    (0x1D4FE, 0x1D4FE, Mapped, "u", Unspecified),
    (0x1D4FF, 0x1D4FF, Mapped, "v", Unspecified),
    (0x1D500, 0x1D500, Mapped, "w", Unspecified),
    (0x1D501, 0x1D501, Mapped, "x", Unspecified),
    (0x1D502, 0x1D502, Mapped, "y", Unspecified),
    (0x1D503, 0x1D503, Mapped, "z", Unspecified),
    (0x1D504, 0x1D504, Mapped, "a", Unspecified),
    (0x1D505, 0x1D505, Mapped, "b", Unspecified),
    (0x1D506, 0x1D506, Disallowed, "", Unspecified),
    (0x1D507, 0x1D507, Mapped, "d", Unspecified),
    (0x1D508, 0x1D508, Mapped, "e", Unspecified),
    (0x1D509, 0x1D509, Mapped, "f", Unspecified),
    (0x1D50A, 0x1D50A, Mapped, "g", Unspecified),
    (0x1D50B, 0x1D50C, Disallowed, "", Unspecified),
    (0x1D50D, 0x1D50D, Mapped, "j", Unspecified),
    (0x1D50E, 0x1D50E, Mapped, "k", Unspecified),
    (0x1D50F, 0x1D50F, Mapped, "l", Unspecified),
    (0x1D510, 0x1D510, Mapped, "m", Unspecified),
    (0x1D511, 0x1D511, Mapped, "n", Unspecified),
    (0x1D512, 0x1D512, Mapped, "o", Unspecified),
    (0x1D513, 0x1D513, Mapped, "p", Unspecified),
    (0x1D514, 0x1D514, Mapped, "q", Unspecified),
    (0x1D515, 0x1D515, Disallowed, "", Unspecified),
    (0x1D516, 0x1D516, Mapped, "s", Unspecified),
    (0x1D517, 0x1D517, Mapped, "t", Unspecified),
    (0x1D518, 0x1D518, Mapped, "u", Unspecified),
    (0x1D519, 0x1D519, Mapped, "v", Unspecified),
    (0x1D51A, 0x1D51A, Mapped, "w", Unspecified),
    (0x1D51B, 0x1D51B, Mapped, "x", Unspecified),
    (0x1D51C, 0x1D51C, Mapped, "y", Unspecified),
    (0x1D51D, 0x1D51D, Disallowed, "", Unspecified),
    (0x1D51E, 0x1D51E, Mapped, "a", Unspecified),
    (0x1D51F, 0x1D51F, Mapped, "b", Unspecified),
    (0x1D520, 0x1D520, Mapped, "c", Unspecified),
    (0x1D521, 0x1D521, Mapped, "d", Unspecified),
    (0x1D522, 0x1D522, Mapped, "e", Unspecified),
    (0x1D523, 0x1D523, Mapped, "f", Unspecified),
    (0x1D524, 0x1D524, Mapped, "g", Unspecified),
    (0x1D525, 0x1D525, Mapped, "h", Unspecified),
    (0x1D526, 0x1D526, Mapped, "i", Unspecified),
    (0x1D527, 0x1D527, Mapped, "j", Unspecified),
    (0x1D528, 0x1D528, Mapped, "k", Unspecified),
    (0x1D529, 0x1D529, Mapped, "l", Unspecified),
    (0x1D52A, 0x1D52A, Mapped, "m", Unspecified),
    (0x1D52B, 0x1D52B, Mapped, "n", Unspecified),
    (0x1D52C, 0x1D52C, Mapped, "o", Unspecified),
    (0x1D52D, 0x1D52D, Mapped, "p", Unspecified),
    (0x1D52E, 0x1D52E, Mapped, "q", Unspecified),
    (0x1D52F, 0x1D52F, Mapped, "r", Unspecified),
    (0x1D530, 0x1D530, Mapped, "s", Unspecified),
    (0x1D531, 0x1D531, Mapped, "t", Unspecified),
    (0x1D532, 0x1D532, Mapped, "u", Unspecified),
    (0x1D533, 0x1D533, Mapped, "v", Unspecified),
    (0x1D534, 0x1D534, Mapped, "w", Unspecified),
    (0x1D535, 0x1D535, Mapped, "x", Unspecified),
    (0x1D536, 0x1D536, Mapped, "y", Unspecified),
    (0x1D537, 0x1D537, Mapped, "z", Unspecified),
    (0x1D538, 0x1D538, Mapped, "a", Unspecified),
    (0x1D539, 0x1D539, Mapped, "b", Unspecified),
    (0x1D53A, 0x1D53A, Disallowed, "", Unspecified),
    (0x1D53B, 0x1D53B, Mapped, "d", Unspecified),
    (0x1D53C, 0x1D53C, Mapped, "e", Unspecified),
    (0x1D53D, 0x1D53D, Mapped, "f", Unspecified),
    (0x1D53E, 0x1D53E, Mapped, "g", Unspecified),
    (0x1D53F, 0x1D53F, Disallowed, "", Unspecified),
    (0x1D540, 0x1D540, Mapped, "i", Unspecified),
    (0x1D541, 0x1D541, Mapped, "j", Unspecified),
    (0x1D542, 0x1D542, Mapped, "k", Unspecified),
    (0x1D543, 0x1D543, Mapped, "l", Unspecified),
    (0x1D544, 0x1D544, Mapped, "m", Unspecified),
    (0x1D545, 0x1D545, Disallowed, "", Unspecified),
    (0x1D546, 0x1D546, Mapped, "o", Unspecified),
    (0x1D547, 0x1D549, Disallowed, "", Unspecified),
    (0x1D54A, 0x1D54A, Mapped, "s", Unspecified),
    (0x1D54B, 0x1D54B, Mapped, "t", Unspecified),
    (0x1D54C, 0x1D54C, Mapped, "u", Unspecified),
    (0x1D54D, 0x1D54D, Mapped, "v", Unspecified),
    (0x1D54E, 0x1D54E, Mapped, "w", Unspecified),
    (0x1D54F, 0x1D54F, Mapped, "x", Unspecified),
    (0x1D550, 0x1D550, Mapped, "y", Unspecified),
    (0x1D551, 0x1D551, Disallowed, "", Unspecified),
    (0x1D552, 0x1D552, Mapped, "a", Unspecified),
    (0x1D553, 0x1D553, Mapped, "b", Unspecified),
    (0x1D554, 0x1D554, Mapped, "c", Unspecified),
    (0x1D555, 0x1D555, Mapped, "d", Unspecified),
    (0x1D556, 0x1D556, Mapped, "e", Unspecified),
    (0x1D557, 0x1D557, Mapped, "f", Unspecified),
    (0x1D558, 0x1D558, Mapped, "g", Unspecified),
    (0x1D559, 0x1D559, Mapped, "h", Unspecified),
    (0x1D55A, 0x1D55A, Mapped, "i", Unspecified),
    (0x1D55B, 0x1D55B, Mapped, "j", Unspecified),
    (0x1D55C, 0x1D55C, Mapped, "k", Unspecified),
    (0x1D55D, 0x1D55D, Mapped, "l", Unspecified),
    (0x1D55E, 0x1D55E, Mapped, "m", Unspecified),
    (0x1D55F, 0x1D55F, Mapped, "n", Unspecified),
    (0x1D560, 0x1D560, Mapped, "o", Unspecified),
    (0x1D561, 0x1D561, Mapped, "p", Unspecified),
    (0x1D562, 0x1D562, Mapped, "q", Unspecified),
    (0x1D563, 0x1D563, Mapped, "r", Unspecified),
    (0x1D564, 0x1D564, Mapped, "s", Unspecified),
    (0x1D565, 0x1D565, Mapped, "t", Unspecified),
    (0x1D566, 0x1D566, Mapped, "u", Unspecified),
    (0x1D567, 0x1D567, Mapped, "v", Unspecified),
    (0x1D568, 0x1D568, Mapped, "w", Unspecified),
    (0x1D569, 0x1D569, Mapped, "x", Unspecified),
    (0x1D56A, 0x1D56A, Mapped, "y", Unspecified),
    (0x1D56B, 0x1D56B, Mapped, "z", Unspecified),
    (0x1D56C, 0x1D56C, Mapped, "a", Unspecified),
    (0x1D56D, 0x1D56D, Mapped, "b", Unspecified),
    (0x1D56E, 0x1D56E, Mapped, "c", Unspecified),
    (0x1D56F, 0x1D56F, Mapped, "d", Unspecified),
    (0x1D570, 0x1D570, Mapped, "e", Unspecified),
    (0x1D571, 0x1D571, Mapped, "f", Unspecified),
    (0x1D572, 0x1D572, Mapped, "g", Unspecified),
    (0x1D573, 0x1D573, Mapped, "h", Unspecified),
    (0x1D574, 0x1D574, Mapped, "i", Unspecified),
    (0x1D575, 0x1D575, Mapped, "j", Unspecified),
    (0x1D576, 0x1D576, Mapped, "k", Unspecified),
    (0x1D577, 0x1D577, Mapped, "l", Unspecified),
    (0x1D578, 0x1D578, Mapped, "m", Unspecified),
    (0x1D579, 0x1D579, Mapped, "n", Unspecified),
    (0x1D57A, 0x1D57A, Mapped, "o", Unspecified),
    (0x1D57B, 0x1D57B, Mapped, "p", Unspecified),
    (0x1D57C, 0x1D57C, Mapped, "q", Unspecified),
    (0x1D57D, 0x1D57D, Mapped, "r", Unspecified),
    (0x1D57E, 0x1D57E, Mapped, "s", Unspecified),
    (0x1D57F, 0x1D57F, Mapped, "t", Unspecified),
    (0x1D580, 0x1D580, Mapped, "u", Unspecified),
    (0x1D581, 0x1D581, Mapped, "v", Unspecified),
    (0x1D582, 0x1D582, Mapped, "w", Unspecified),
    (0x1D583, 0x1D583, Mapped, "x", Unspecified),
    (0x1D584, 0x1D584, Mapped, "y", Unspecified),
    (0x1D585, 0x1D585, Mapped, "z", Unspecified),
    (0x1D586, 0x1D586, Mapped, "a", Unspecified),
    (0x1D587, 0x1D587, Mapped, "b", Unspecified),
    (0x1D588, 0x1D588, Mapped, "c", Unspecified),
    (0x1D589, 0x1D589, Mapped, "d", Unspecified),
    (0x1D58A, 0x1D58A, Mapped, "e", Unspecified),
    (0x1D58B, 0x1D58B, Mapped, "f", Unspecified),
    (0x1D58C, 0x1D58C, Mapped, "g", Unspecified),
    (0x1D58D, 0x1D58D, Mapped, "h", Unspecified),
    (0x1D58E, 0x1D58E, Mapped, "i", Unspecified),
    (0x1D58F, 0x1D58F, Mapped, "j", Unspecified),
    (0x1D590, 0x1D590, Mapped, "k", Unspecified),
    (0x1D591, 0x1D591, Mapped, "l", Unspecified),
    (0x1D592, 0x1D592, Mapped, "m", Unspecified),
    (0x1D593, 0x1D593, Mapped, "n", Unspecified),
    (0x1D594, 0x1D594, Mapped, "o", Unspecified),
    (0x1D595, 0x1D595, Mapped, "p", Unspecified),
    (0x1D596, 0x1D596, Mapped, "q", Unspecified),
    (0x1D597, 0x1D597, Mapped, "r", Unspecified),
    (0x1D598, 0x1D598, Mapped, "s", Unspecified),
    (0x1D599, 0x1D599, Mapped, "t", Unspecified),
    (0x1D59A, 0x1D59A, Mapped, "u", Unspecified),
    (0x1D59B, 0x1D59B, Mapped, "v", Unspecified),
    (0x1D59C, 0x1D59C, Mapped, "w", Unspecified),
    (0x1D59D, 0x1D59D, Mapped, "x", Unspecified),
    (0x1D59E, 0x1D59E, Mapped, "y", Unspecified),
    (0x1D59F, 0x1D59F, Mapped, "z", Unspecified),
    (0x1D5A0, 0x1D5A0, Mapped, "a", Unspecified),
    (0x1D5A1, 0x1D5A1, Mapped, "b", Unspecified),
    (0x1D5A2, 0x1D5A2, Mapped, "c", Unspecified),
    (0x1D5A3, 0x1D5A3, Mapped, "d", Unspecified),
    (0x1D5A4, 0x1D5A4, Mapped, "e", Unspecified),
    (0x1D5A5, 0x1D5A5, Mapped, "f", Unspecified),
    (0x1D5A6, 0x1D5A6, Mapped, "g", Unspecified),
    (0x1D5A7, 0x1D5A7, Mapped, "h", Unspecified),
    (0x1D5A8, 0x1D5A8, Mapped, "i", Unspecified),
    (0x1D5A9, 0x1D5A9, Mapped, "j", Unspecified),
    (0x1D5AA, 0x1D5AA, Mapped, "k", Unspecified),
    (0x1D5AB, 0x1D5AB, Mapped, "l", Unspecified),
    (0x1D5AC, 0x1D5AC, Mapped, "m", Unspecified),
    (0x1D5AD, 0x1D5AD, Mapped, "n", Unspecified),
    (0x1D5AE, 0x1D5AE, Mapped, "o", Unspecified),
    (0x1D5AF, 0x1D5AF, Mapped, "p", Unspecified),
    (0x1D5B0, 0x1D5B0, Mapped, "q", Unspecified),
    (0x1D5B1, 0x1D5B1, Mapped, "r", Unspecified),
    (0x1D5B2, 0x1D5B2, Mapped, "s", Unspecified),
    (0x1D5B3, 0x1D5B3, Mapped, "t", Unspecified),
    (0x1D5B4, 0x1D5B4, Mapped, "u", Unspecified),
    (0x1D5B5, 0x1D5B5, Mapped, "v", Unspecified),
    (0x1D5B6, 0x1D5B6, Mapped, "w", Unspecified),
    (0x1D5B7, 0x1D5B7, Mapped, "x", Unspecified),
    (0x1D5B8, 0x1D5B8, Mapped, "y", Unspecified),
    (0x1D5B9, 0x1D5B9, Mapped, "z", Unspecified),
    (0x1D5BA, 0x1D5BA, Mapped, "a", Unspecified),
    (0x1D5BB, 0x1D5BB, Mapped, "b", Unspecified),
    (0x1D5BC, 0x1D5BC, Mapped, "c", Unspecified),
    (0x1D5BD, 0x1D5BD, Mapped, "d", Unspecified),
    (0x1D5BE, 0x1D5BE, Mapped, "e", Unspecified),
    (0x1D5BF, 0x1D5BF, Mapped, "f", Unspecified),
    (0x1D5C0, 0x1D5C0, Mapped, "g", Unspecified),
    (0x1D5C1, 0x1D5C1, Mapped, "h", Unspecified),
    (0x1D5C2, 0x1D5C2, Mapped, "i", Unspecified),
    (0x1D5C3, 0x1D5C3, Mapped, "j", Unspecified),
    (0x1D5C4, 0x1D5C4, Mapped, "k", Unspecified),
    (0x1D5C5, 0x1D5C5, Mapped, "l", Unspecified),
    (0x1D5C6, 0x1D5C6, Mapped, "m", Unspecified),
    (0x1D5C7, 0x1D5C7, Mapped, "n", Unspecified),
    (0x1D5C8, 0x1D5C8, Mapped, "o", Unspecified),
    (0x1D5C9, 0x1D5C9, Mapped, "p", Unspecified),
    (0x1D5CA, 0x1D5CA, Mapped, "q", Unspecified),
    (0x1D5CB, 0x1D5CB, Mapped, "r", Unspecified),
    (0x1D5CC, 0x1D5CC, Mapped, "s", Unspecified),
    (0x1D5CD, 0x1D5CD, Mapped, "t", Unspecified),
    (0x1D5CE, 0x1D5CE, Mapped, "u", Unspecified),
    (0x1D5CF, 0x1D5CF, Mapped, "v", Unspecified),
    (0x1D5D0, 0x1D5D0, Mapped, "w", Unspecified),
    (0x1D5D1, 0x1D5D1, Mapped, "x", Unspecified),
    (0x1D5D2, 0x1D5D2, Mapped, "y", Unspecified),
    (0x1D5D3, 0x1D5D3, Mapped, "z", Unspecified),
    (0x1D5D4, 0x1D5D4, Mapped, "a", Unspecified),
    (0x1D5D5, 0x1D5D5, Mapped, "b", Unspecified),
    (0x1D5D6, 0x1D5D6, Mapped, "c", Unspecified),
    (0x1D5D7, 0x1D5D7, Mapped, "d", Unspecified),
    (0x1D5D8, 0x1D5D8, Mapped, "e", Unspecified),
    (0x1D5D9, 0x1D5D9, Mapped, "f", Unspecified),
    (0x1D5DA, 0x1D5DA, Mapped, "g", Unspecified),
    (0x1D5DB, 0x1D5DB, Mapped, "h", Unspecified),
    (0x1D5DC, 0x1D5DC, Mapped, "i", Unspecified),
    (0x1D5DD, 0x1D5DD, Mapped, "j", Unspecified),
    (0x1D5DE, 0x1D5DE, Mapped, "k", Unspecified),
    (0x1D5DF, 0x1D5DF, Mapped, "l", Unspecified),
    (0x1D5E0, 0x1D5E0, Mapped, "m", Unspecified),
    (0x1D5E1, 0x1D5E1, Mapped, "n", Unspecified),
    (0x1D5E2, 0x1D5E2, Mapped, "o", Unspecified),
    (0x1D5E3, 0x1D5E3, Mapped, "p", Unspecified),
    (0x1D5E4, 0x1D5E4, Mapped, "q", Unspecified),
    (0x1D5E5, 0x1D5E5, Mapped, "r", Unspecified),
    (0x1D5E6, 0x1D5E6, Mapped, "s", Unspecified),
    (0x1D5E7, 0x1D5E7, Mapped, "t", Unspecified),
    (0x1D5E8, 0x1D5E8, Mapped, "u", Unspecified),
    (0x1D5E9, 0x1D5E9, Mapped, "v", Unspecified),
    (0x1D5EA, 0x1D5EA, Mapped, "w", Unspecified),
    (0x1D5EB, 0x1D5EB, Mapped, "x", Unspecified),
    (0x1D5EC, 0x1D5EC, Mapped, "y", Unspecified),
    (0x1D5ED, 0x1D5ED, Mapped, "z", Unspecified),
    (0x1D5EE, 0x1D5EE, Mapped, "a", Unspecified),
    (0x1D5EF, 0x1D5EF, Mapped, "b", Unspecified),
    (0x1D5F0, 0x1D5F0, Mapped, "c", Unspecified),
    (0x1D5F1, 0x1D5F1, Mapped, "d", Unspecified),
    (0x1D5F2, 0x1D5F2, Mapped, "e", Unspecified),
    (0x1D5F3, 0x1D5F3, Mapped, "f", Unspecified),
    (0x1D5F4, 0x1D5F4, Mapped, "g", Unspecified),
    (0x1D5F5, 0x1D5F5, Mapped, "h", Unspecified),
    (0x1D5F6, 0x1D5F6, Mapped, "i", Unspecified),
    (0x1D5F7, 0x1D5F7, Mapped, "j", Unspecified),
    (0x1D5F8, 0x1D5F8, Mapped, "k", Unspecified),
    (0x1D5F9, 0x1D5F9, Mapped, "l", Unspecified),
    (0x1D5FA, 0x1D5FA, Mapped, "m", Unspecified),
    (0x1D5FB, 0x1D5FB, Mapped, "n", Unspecified),
    (0x1D5FC, 0x1D5FC, Mapped, "o", Unspecified),
    (0x1D5FD, 0x1D5FD, Mapped, "p", Unspecified),
    (0x1D5FE, 0x1D5FE, Mapped, "q", Unspecified),
    (0x1D5FF, 0x1D5FF, Mapped, "r", Unspecified),
    (0x1D600, 0x1D600, Mapped, "s", Unspecified),
    (0x1D601, 0x1D601, Mapped, "t", Unspecified),
    (0x1D602, 0x1D602, Mapped, "u", Unspecified),
    (0x1D603, 0x1D603, Mapped, "v", Unspecified),
    (0x1D604, 0x1D604, Mapped, "w", Unspecified),
    (0x1D605, 0x1D605, Mapped, "x", Unspecified),
    (0x1D606, 0x1D606, Mapped, "y", Unspecified),
    (0x1D607, 0x1D607, Mapped, "z", Unspecified),
    (0x1D608, 0x1D608, Mapped, "a", Unspecified),
    (0x1D609, 0x1D609, Mapped, "b", Unspecified),
    (0x1D60A, 0x1D60A, Mapped, "c", Unspecified),
    (0x1D60B, 0x1D60B, Mapped, "d", Unspecified),
    (0x1D60C, 0x1D60C, Mapped, "e", Unspecified),
    (0x1D60D, 0x1D60D, Mapped, "f", Unspecified),
    (0x1D60E, 0x1D60E, Mapped, "g", Unspecified),
    (0x1D60F, 0x1D60F, Mapped, "h", Unspecified),
    (0x1D610, 0x1D610, Mapped, "i", Unspecified),
    (0x1D611, 0x1D611, Mapped, "j", Unspecified),
    (0x1D612, 0x1D612, Mapped, "k", Unspecified),
    (0x1D613, 0x1D613, Mapped, "l", Unspecified),
    (0x1D614, 0x1D614, Mapped, "m", Unspecified),
    (0x1D615, 0x1D615, Mapped, "n", Unspecified),
    (0x1D616, 0x1D616, Mapped, "o", Unspecified),
    (0x1D617, 0x1D617, Mapped, "p", Unspecified),
    (0x1D618, 0x1D618, Mapped, "q", Unspecified),
    (0x1D619, 0x1D619, Mapped, "r", Unspecified),
    (0x1D61A, 0x1D61A, Mapped, "s", Unspecified),
    (0x1D61B, 0x1D61B, Mapped, "t", Unspecified),
    (0x1D61C, 0x1D61C, Mapped, "u", Unspecified),
    (0x1D61D, 0x1D61D, Mapped, "v", Unspecified),
    (0x1D61E, 0x1D61E, Mapped, "w", Unspecified),
    (0x1D61F, 0x1D61F, Mapped, "x", Unspecified),
    (0x1D620, 0x1D620, Mapped, "y", Unspecified),
    (0x1D621, 0x1D621, Mapped, "z", Unspecified),
    (0x1D622, 0x1D622, Mapped, "a", Unspecified),
    (0x1D623, 0x1D623, Mapped, "b", Unspecified),
    (0x1D624, 0x1D624, Mapped, "c", Unspecified),
    (0x1D625, 0x1D625, Mapped, "d", Unspecified),
    (0x1D626, 0x1D626, Mapped, "e", Unspecified),
    (0x1D627, 0x1D627, Mapped, "f", Unspecified),
    (0x1D628, 0x1D628, Mapped, "g", Unspecified),
    (0x1D629, 0x1D629, Mapped, "h", Unspecified),
    (0x1D62A, 0x1D62A, Mapped, "i", Unspecified),
    (0x1D62B, 0x1D62B, Mapped, "j", Unspecified),
    (0x1D62C, 0x1D62C, Mapped, "k", Unspecified),
    (0x1D62D, 0x1D62D, Mapped, "l", Unspecified),
    (0x1D62E, 0x1D62E, Mapped, "m", Unspecified),
    (0x1D62F, 0x1D62F, Mapped, "n", Unspecified),
    (0x1D630, 0x1D630, Mapped, "o", Unspecified),
    (0x1D631, 0x1D631, Mapped, "p", Unspecified),
    (0x1D632, 0x1D632, Mapped, "q", Unspecified),
    (0x1D633, 0x1D633, Mapped, "r", Unspecified),
    (0x1D634, 0x1D634, Mapped, "s", Unspecified),
    (0x1D635, 0x1D635, Mapped, "t", Unspecified),
    (0x1D636, 0x1D636, Mapped, "u", Unspecified),
    (0x1D637, 0x1D637, Mapped, "v", Unspecified),
    (0x1D638, 0x1D638, Mapped, "w", Unspecified),
    (0x1D639, 0x1D639, Mapped, "x", Unspecified),
    (0x1D63A, 0x1D63A, Mapped, "y", Unspecified),
    (0x1D63B, 0x1D63B, Mapped, "z", Unspecified),
    (0x1D63C, 0x1D63C, Mapped, "a", Unspecified),
    (0x1D63D, 0x1D63D, Mapped, "b", Unspecified),
    (0x1D63E, 0x1D63E, Mapped, "c", Unspecified),
    (0x1D63F, 0x1D63F, Mapped, "d", Unspecified),
    (0x1D640, 0x1D640, Mapped, "e", Unspecified),
    (0x1D641, 0x1D641, Mapped, "f", Unspecified),
    (0x1D642, 0x1D642, Mapped, "g", Unspecified),
    (0x1D643, 0x1D643, Mapped, "h", Unspecified),
    (0x1D644, 0x1D644, Mapped, "i", Unspecified),
    (0x1D645, 0x1D645, Mapped, "j", Unspecified),
    (0x1D646, 0x1D646, Mapped, "k", Unspecified),
    (0x1D647, 0x1D647, Mapped, "l", Unspecified),
    (0x1D648, 0x1D648, Mapped, "m", Unspecified),
    (0x1D649, 0x1D649, Mapped, "n", Unspecified),
    (0x1D64A, 0x1D64A, Mapped, "o", Unspecified),
    (0x1D64B, 0x1D64B, Mapped, "p", Unspecified),
    (0x1D64C, 0x1D64C, Mapped, "q", Unspecified),
    (0x1D64D, 0x1D64D, Mapped, "r", Unspecified),
    (0x1D64E, 0x1D64E, Mapped, "s", Unspecified),
    (0x1D64F, 0x1D64F, Mapped, "t", Unspecified),
    (0x1D650, 0x1D650, Mapped, "u", Unspecified),
    (0x1D651, 0x1D651, Mapped, "v", Unspecified),
    (0x1D652, 0x1D652, Mapped, "w", Unspecified),
    (0x1D653, 0x1D653, Mapped, "x", Unspecified),
    (0x1D654, 0x1D654, Mapped, "y", Unspecified),
    (0x1D655, 0x1D655, Mapped, "z", Unspecified),
    (0x1D656, 0x1D656, Mapped, "a", Unspecified),
    (0x1D657, 0x1D657, Mapped, "b", Unspecified),
    (0x1D658, 0x1D658, Mapped, "c", Unspecified),
    (0x1D659, 0x1D659, Mapped, "d", Unspecified),
    (0x1D65A, 0x1D65A, Mapped, "e", Unspecified),
    (0x1D65B, 0x1D65B, Mapped, "f", Unspecified),
    (0x1D65C, 0x1D65C, Mapped, "g", Unspecified),
    (0x1D65D, 0x1D65D, Mapped, "h", Unspecified),
    (0x1D65E, 0x1D65E, Mapped, "i", Unspecified),
    (0x1D65F, 0x1D65F, Mapped, "j", Unspecified),
    (0x1D660, 0x1D660, Mapped, "k", Unspecified),
    (0x1D661, 0x1D661, Mapped, "l", Unspecified),
    (0x1D662, 0x1D662, Mapped, "m", Unspecified),
    (0x1D663, 0x1D663, Mapped, "n", Unspecified),
    (0x1D664, 0x1D664, Mapped, "o", Unspecified),
    (0x1D665, 0x1D665, Mapped, "p", Unspecified),
    (0x1D666, 0x1D666, Mapped, "q", Unspecified),
    (0x1D667, 0x1D667, Mapped, "r", Unspecified),
    (0x1D668, 0x1D668, Mapped, "s", Unspecified),
    (0x1D669, 0x1D669, Mapped, "t", Unspecified),
    (0x1D66A, 0x1D66A, Mapped, "u", Unspecified),
    (0x1D66B, 0x1D66B, Mapped, "v", Unspecified),
    (0x1D66C, 0x1D66C, Mapped, "w", Unspecified),
    (0x1D66D, 0x1D66D, Mapped, "x", Unspecified),
    (0x1D66E, 0x1D66E, Mapped, "y", Unspecified),
    (0x1D66F, 0x1D66F, Mapped, "z", Unspecified),
    (0x1D670, 0x1D670, Mapped, "a", Unspecified),
    (0x1D671, 0x1D671, Mapped, "b", Unspecified),
    (0x1D672, 0x1D672, Mapped, "c", Unspecified),
    (0x1D673, 0x1D673, Mapped, "d", Unspecified),
    (0x1D674, 0x1D674, Mapped, "e", Unspecified),
    (0x1D675, 0x1D675, Mapped, "f", Unspecified),
    (0x1D676, 0x1D676, Mapped, "g", Unspecified),
    (0x1D677, 0x1D677, Mapped, "h", Unspecified),
    (0x1D678, 0x1D678, Mapped, "i", Unspecified),
    (0x1D679, 0x1D679, Mapped, "j", Unspecified),
    (0x1D67A, 0x1D67A, Mapped, "k", Unspecified),
    (0x1D67B, 0x1D67B, Mapped, "l", Unspecified),
    (0x1D67C, 0x1D67C, Mapped, "m", Unspecified),
    (0x1D67D, 0x1D67D, Mapped, "n", Unspecified),
    (0x1D67E, 0x1D67E, Mapped, "o", Unspecified),
    (0x1D67F, 0x1D67F, Mapped, "p", Unspecified),
    (0x1D680, 0x1D680, Mapped, "q", Unspecified),
    (0x1D681, 0x1D681, Mapped, "r", Unspecified),
    (0x1D682, 0x1D682, Mapped, "s", Unspecified),
    (0x1D683, 0x1D683, Mapped, "t", Unspecified),
    (0x1D684, 0x1D684, Mapped, "u", Unspecified),
    (0x1D685, 0x1D685, Mapped, "v", Unspecified),
    (0x1D686, 0x1D686, Mapped, "w", Unspecified),
    (0x1D687, 0x1D687, Mapped, "x", Unspecified),
    (0x1D688, 0x1D688, Mapped, "y", Unspecified),
    (0x1D689, 0x1D689, Mapped, "z", Unspecified),
    (0x1D68A, 0x1D68A, Mapped, "a", Unspecified),
    (0x1D68B, 0x1D68B, Mapped, "b", Unspecified),
    (0x1D68C, 0x1D68C, Mapped, "c", Unspecified),
    (0x1D68D, 0x1D68D, Mapped, "d", Unspecified),
    (0x1D68E, 0x1D68E, Mapped, "e", Unspecified),
    (0x1D68F, 0x1D68F, Mapped, "f", Unspecified),
    (0x1D690, 0x1D690, Mapped, "g", Unspecified),
    (0x1D691, 0x1D691, Mapped, "h", Unspecified),
    (0x1D692, 0x1D692, Mapped, "i", Unspecified),
    (0x1D693, 0x1D693, Mapped, "j", Unspecified),
    (0x1D694, 0x1D694, Mapped, "k", Unspecified),
    (0x1D695, 0x1D695, Mapped, "l", Unspecified),
    (0x1D696, 0x1D696, Mapped, "m", Unspecified),
    (0x1D697, 0x1D697, Mapped, "n", Unspecified),
    (0x1D698, 0x1D698, Mapped, "o", Unspecified),
    (0x1D699, 0x1D699, Mapped, "p", Unspecified),
    (0x1D69A, 0x1D69A, Mapped, "q", Unspecified),
    (0x1D69B, 0x1D69B, Mapped, "r", Unspecified),
    (0x1D69C, 0x1D69C, Mapped, "s", Unspecified),
    (0x1D69D, 0x1D69D, Mapped, "t", Unspecified),
    (0x1D69E, 0x1D69E, Mapped, "u", Unspecified),
    (0x1D69F, 0x1D69F, Mapped, "v", Unspecified),
    (0x1D6A0, 0x1D6A0, Mapped, "w", Unspecified),
    (0x1D6A1, 0x1D6A1, Mapped, "x", Unspecified),
    (0x1D6A2, 0x1D6A2, Mapped, "y", Unspecified),
    (0x1D6A3, 0x1D6A3, Mapped, "z", Unspecified),
    (0x1D6A4, 0x1D6A4, Mapped, "\u{131}", Unspecified),
    (0x1D6A5, 0x1D6A5, Mapped, "\u{237}", Unspecified),
    (0x1D6A6, 0x1D6A7, Disallowed, "", Unspecified),
    (0x1D6A8, 0x1D6A8, Mapped, "\u{3B1}", Unspecified),
    (0x1D6A9, 0x1D6A9, Mapped, "\u{3B2}", Unspecified),
    (0x1D6AA, 0x1D6AA, Mapped, "\u{3B3}", Unspecified),
    (0x1D6AB, 0x1D6AB, Mapped, "\u{3B4}", Unspecified),
    (0x1D6AC, 0x1D6AC, Mapped, "\u{3B5}", Unspecified),
    (0x1D6AD, 0x1D6AD, Mapped, "\u{3B6}", Unspecified),
    (0x1D6AE, 0x1D6AE, Mapped, "\u{3B7}", Unspecified),
    (0x1D6AF, 0x1D6AF, Mapped, "\u{3B8}", Unspecified),
    (0x1D6B0, 0x1D6B0, Mapped, "\u{3B9}", Unspecified),
    (0x1D6B1, 0x1D6B1, Mapped, "\u{3BA}", Unspecified),
    (0x1D6B2, 0x1D6B2, Mapped, "\u{3BB}", Unspecified),
    (0x1D6B3, 0x1D6B3, Mapped, "\u{3BC}", Unspecified),
    (0x1D6B4, 0x1D6B4, Mapped, "\u{3BD}", Unspecified),
    (0x1D6B5, 0x1D6B5, Mapped, "\u{3BE}", Unspecified),
    (0x1D6B6, 0x1D6B6, Mapped, "\u{3BF}", Unspecified),
    (0x1D6B7, 0x1D6B7, Mapped, "\u{3C0}", Unspecified),
    (0x1D6B8, 0x1D6B8, Mapped, "\u{3C1}", Unspecified),
    (0x1D6B9, 0x1D6B9, Mapped, "\u{3B8}", Unspecified),
    (0x1D6BA, 0x1D6BA, Mapped, "\u{3C3}", Unspecified),
    (0x1D6BB, 0x1D6BB, Mapped, "\u{3C4}", Unspecified),
    (0x1D6BC, 0x1D6BC, Mapped, "\u{3C5}", Unspecified),
    (0x1D6BD, 0x1D6BD, Mapped, "\u{3C6}", Unspecified),
    (0x1D6BE, 0x1D6BE, Mapped, "\u{3C7}", Unspecified),
    (0x1D6BF, 0x1D6BF, Mapped, "\u{3C8}", Unspecified),
    (0x1D6C0, 0x1D6C0, Mapped, "\u{3C9}", Unspecified),
    (0x1D6C1, 0x1D6C1, Mapped, "\u{2207}", Unspecified),
    (0x1D6C2, 0x1D6C2, Mapped, "\u{3B1}", Unspecified),
    (0x1D6C3, 0x1D6C3, Mapped, "\u{3B2}", Unspecified),
    (0x1D6C4, 0x1D6C4, Mapped, "\u{3B3}", Unspecified),
    (0x1D6C5, 0x1D6C5, Mapped, "\u{3B4}", Unspecified),
    (0x1D6C6, 0x1D6C6, Mapped, "\u{3B5}", Unspecified),
    (0x1D6C7, 0x1D6C7, Mapped, "\u{3B6}", Unspecified),
    (0x1D6C8, 0x1D6C8, Mapped, "\u{3B7}", Unspecified),
    (0x1D6C9, 0x1D6C9, Mapped, "\u{3B8}", Unspecified),
    (0x1D6CA, 0x1D6CA, Mapped, "\u{3B9}", Unspecified),
    (0x1D6CB, 0x1D6CB, Mapped, "\u{3BA}", Unspecified),
    (0x1D6CC, 0x1D6CC, Mapped, "\u{3BB}", Unspecified),
    (0x1D6CD, 0x1D6CD, Mapped, "\u{3BC}", Unspecified),
    (0x1D6CE, 0x1D6CE, Mapped, "\u{3BD}", Unspecified),
    (0x1D6CF, 0x1D6CF, Mapped, "\u{3BE}", Unspecified),
    (0x1D6D0, 0x1D6D0, Mapped, "\u{3BF}", Unspecified),
    (0x1D6D1, 0x1D6D1, Mapped, "\u{3C0}", Unspecified),
    (0x1D6D2, 0x1D6D2, Mapped, "\u{3C1}", Unspecified),
    (0x1D6D3, 0x1D6D4, Mapped, "\u{3C3}", Unspecified),
    (0x1D6D5, 0x1D6D5, Mapped, "\u{3C4}", Unspecified),
    (0x1D6D6, 0x1D6D6, Mapped, "\u{3C5}", Unspecified),
    (0x1D6D7, 0x1D6D7, Mapped, "\u{3C6}", Unspecified),
    (0x1D6D8, 0x1D6D8, Mapped, "\u{3C7}", Unspecified),
    (0x1D6D9, 0x1D6D9, Mapped, "\u{3C8}", Unspecified),
    (0x1D6DA, 0x1D6DA, Mapped, "\u{3C9}", Unspecified),
    (0x1D6DB, 0x1D6DB, Mapped, "\u{2202}", Unspecified),
    (0x1D6DC, 0x1D6DC, Mapped, "\u{3B5}", Unspecified),
    (0x1D6DD, 0x1D6DD, Mapped, "\u{3B8}", Unspecified),
    (0x1D6DE, 0x1D6DE, Mapped, "\u{3BA}", Unspecified),
    (0x1D6DF, 0x1D6DF, Mapped, "\u{3C6}", Unspecified),
    (0x1D6E0, 0x1D6E0, Mapped, "\u{3C1}", Unspecified),
    (0x1D6E1, 0x1D6E1, Mapped, "\u{3C0}", Unspecified),
    (0x1D6E2, 0x1D6E2, Mapped, "\u{3B1}", Unspecified),
    (0x1D6E3, 0x1D6E3, Mapped, "\u{3B2}", Unspecified),
    (0x1D6E4, 0x1D6E4, Mapped, "\u{3B3}", Unspecified),
    (0x1D6E5, 0x1D6E5, Mapped, "\u{3B4}", Unspecified),
    (0x1D6E6, 0x1D6E6, Mapped, "\u{3B5}", Unspecified),
    (0x1D6E7, 0x1D6E7, Mapped, "\u{3B6}", Unspecified),
    (0x1D6E8, 0x1D6E8, Mapped, "\u{3B7}", Unspecified),
    (0x1D6E9, 0x1D6E9, Mapped, "\u{3B8}", Unspecified),
    (0x1D6EA, 0x1D6EA, Mapped, "\u{3B9}", Unspecified),
    (0x1D6EB, 0x1D6EB, Mapped, "\u{3BA}", Unspecified),
    (0x1D6EC, 0x1D6EC, Mapped, "\u{3BB}", Unspecified),
    (0x1D6ED, 0x1D6ED, Mapped, "\u{3BC}", Unspecified),
    (0x1D6EE, 0x1D6EE, Mapped, "\u{3BD}", Unspecified),
    (0x1D6EF, 0x1D6EF, Mapped, "\u{3BE}", Unspecified),
    (0x1D6F0, 0x1D6F0, Mapped, "\u{3BF}", Unspecified),
    (0x1D6F1, 0x1D6F1, Mapped, "\u{3C0}", Unspecified),
    (0x1D6F2, 0x1D6F2, Mapped, "\u{3C1}", Unspecified),
    (0x1D6F3, 0x1D6F3, Mapped, "\u{3B8}", Unspecified),
    (0x1D6F4, 0x1D6F4, Mapped, "\u{3C3}", Unspecified),
    (0x1D6F5, 0x1D6F5, Mapped, "\u{3C4}", Unspecified),
    (0x1D6F6, 0x1D6F6, Mapped, "\u{3C5}", Unspecified),
    (0x1D6F7, 0x1D6F7, Mapped, "\u{3C6}", Unspecified),
    (0x1D6F8, 0x1D6F8, Mapped, "\u{3C7}", Unspecified),
    (0x1D6F9, 0x1D6F9, Mapped, "\u{3C8}", Unspecified),
    (0x1D6FA, 0x1D6FA, Mapped, "\u{3C9}", Unspecified),
    (0x1D6FB, 0x1D6FB, Mapped, "\u{2207}", Unspecified),
    (0x1D6FC, 0x1D6FC, Mapped, "\u{3B1}", Unspecified),
    (0x1D6FD, 0x1D6FD, Mapped, "\u{3B2}", Unspecified),
    (0x1D6FE, 0x1D6FE, Mapped, "\u{3B3}", Unspecified),
    (0x1D6FF, 0x1D6FF, Mapped, "\u{3B4}", Unspecified),
    (0x1D700, 0x1D700, Mapped, "\u{3B5}", Unspecified),
    (0x1D701, 0x1D701, Mapped, "\u{3B6}", Unspecified),
    (0x1D702, 0x1D702, Mapped, "\u{3B7}", Unspecified),
    (0x1D703, 0x1D703, Mapped, "\u{3B8}", Unspecified),
    (0x1D704, 0x1D704, Mapped, "\u{3B9}", Unspecified),
    (0x1D705, 0x1D705, Mapped, "\u{3BA}", Unspecified),
    (0x1D706, 0x1D706, Mapped, "\u{3BB}", Unspecified),
    (0x1D707, 0x1D707, Mapped, "\u{3BC}", Unspecified),
    (0x1D708, 0x1D708, Mapped, "\u{3BD}", Unspecified),
    (0x1D709, 0x1D709, Mapped, "\u{3BE}", Unspecified),
    (0x1D70A, 0x1D70A, Mapped, "\u{3BF}", Unspecified),
    (0x1D70B, 0x1D70B, Mapped, "\u{3C0}", Unspecified),
    (0x1D70C, 0x1D70C, Mapped, "\u{3C1}", Unspecified),
    (0x1D70D, 0x1D70E, Mapped, "\u{3C3}", Unspecified),
    (0x1D70F, 0x1D70F, Mapped, "\u{3C4}", Unspecified),
    (0x1D710, 0x1D710, Mapped, "\u{3C5}", Unspecified),
    (0x1D711, 0x1D711, Mapped, "\u{3C6}", Unspecified),
    (0x1D712, 0x1D712, Mapped, "\u{3C7}", Unspecified),
    (0x1D713, 0x1D713, Mapped, "\u{3C8}", Unspecified),
    (0x1D714, 0x1D714, Mapped, "\u{3C9}", Unspecified),
    (0x1D715, 0x1D715, Mapped, "\u{2202}", Unspecified),
    (0x1D716, 0x1D716, Mapped, "\u{3B5}", Unspecified),
    (0x1D717, 0x1D717, Mapped, "\u{3B8}", Unspecified),
    (0x1D718, 0x1D718, Mapped, "\u{3BA}", Unspecified),
    (0x1D719, 0x1D719, Mapped, "\u{3C6}", Unspecified),
    (0x1D71A, 0x1D71A, Mapped, "\u{3C1}", Unspecified),
    (0x1D71B, 0x1D71B, Mapped, "\u{3C0}", Unspecified),
    (0x1D71C, 0x1D71C, Mapped, "\u{3B1}", Unspecified),
    (0x1D71D, 0x1D71D, Mapped, "\u{3B2}", Unspecified),
    (0x1D71E, 0x1D71E, Mapped, "\u{3B3}", Unspecified),
    (0x1D71F, 0x1D71F, Mapped, "\u{3B4}", Unspecified),
    (0x1D720, 0x1D720, Mapped, "\u{3B5}", Unspecified),
    (0x1D721, 0x1D721, Mapped, "\u{3B6}", Unspecified),
    (0x1D722, 0x1D722, Mapped, "\u{3B7}", Unspecified),
    (0x1D723, 0x1D723, Mapped, "\u{3B8}", Unspecified),
    (0x1D724, 0x1D724, Mapped, "\u{3B9}", Unspecified),
    (0x1D725, 0x1D725, Mapped, "\u{3BA}", Unspecified),
    (0x1D726, 0x1D726, Mapped, "\u{3BB}", Unspecified),
    (0x1D727, 0x1D727, Mapped, "\u{3BC}", Unspecified),
    (0x1D728, 0x1D728, Mapped, "\u{3BD}", Unspecified),
    (0x1D729, 0x1D729, Mapped, "\u{3BE}", Unspecified),
    (0x1D72A, 0x1D72A, Mapped, "\u{3BF}", Unspecified),
    (0x1D72B, 0x1D72B, Mapped, "\u{3C0}", Unspecified),
    (0x1D72C, 0x1D72C, Mapped, "\u{3C1}", Unspecified),
    (0x1D72D, 0x1D72D, Mapped, "\u{3B8}", Unspecified),
    (0x1D72E, 0x1D72E, Mapped, "\u{3C3}", Unspecified),
    (0x1D72F, 0x1D72F, Mapped, "\u{3C4}", Unspecified),
    (0x1D730, 0x1D730, Mapped, "\u{3C5}", Unspecified),
    (0x1D731, 0x1D731, Mapped, "\u{3C6}", Unspecified),
    (0x1D732, 0x1D732, Mapped, "\u{3C7}", Unspecified),
    (0x1D733, 0x1D733, Mapped, "\u{3C8}", Unspecified),
    (0x1D734, 0x1D734, Mapped, "\u{3C9}", Unspecified),
    (0x1D735, 0x1D735, Mapped, "\u{2207}", Unspecified),
    (0x1D736, 0x1D736, Mapped, "\u{3B1}", Unspecified),
    (0x1D737, 0x1D737, Mapped, "\u{3B2}", Unspecified),
    (0x1D738, 0x1D738, Mapped, "\u{3B3}", Unspecified),
    (0x1D739, 0x1D739, Mapped, "\u{3B4}", Unspecified),
    (0x1D73A, 0x1D73A, Mapped, "\u{3B5}", Unspecified),
    (0x1D73B, 0x1D73B, Mapped, "\u{3B6}", Unspecified),
    (0x1D73C, 0x1D73C, Mapped, "\u{3B7}", Unspecified),
    (0x1D73D, 0x1D73D, Mapped, "\u{3B8}", Unspecified),
    (0x1D73E, 0x1D73E, Mapped, "\u{3B9}", Unspecified),
    (0x1D73F, 0x1D73F, Mapped, "\u{3BA}", Unspecified),
    (0x1D740, 0x1D740, Mapped, "\u{3BB}", Unspecified),
    (0x1D741, 0x1D741, Mapped, "\u{3BC}", Unspecified),
    (0x1D742, 0x1D742, Mapped, "\u{3BD}", Unspecified),
    (0x1D743, 0x1D743, Mapped, "\u{3BE}", Unspecified),
    (0x1D744, 0x1D744, Mapped, "\u{3BF}", Unspecified),
    (0x1D745, 0x1D745, Mapped, "\u{3C0}", Unspecified),
    (0x1D746, 0x1D746, Mapped, "\u{3C1}", Unspecified),
    (0x1D747, 0x1D748, Mapped, "\u{3C3}", Unspecified),
    (0x1D749, 0x1D749, Mapped, "\u{3C4}", Unspecified),
    (0x1D74A, 0x1D74A, Mapped, "\u{3C5}", Unspecified),
    (0x1D74B, 0x1D74B, Mapped, "\u{3C6}", Unspecified),
    (0x1D74C, 0x1D74C, Mapped, "\u{3C7}", Unspecified),
    (0x1D74D, 0x1D74D, Mapped, "\u{3C8}", Unspecified),
    (0x1D74E, 0x1D74E, Mapped, "\u{3C9}", Unspecified),
    (0x1D74F, 0x1D74F, Mapped, "\u{2202}", Unspecified),
    (0x1D750, 0x1D750, Mapped, "\u{3B5}", Unspecified),
    (0x1D751, 0x1D751, Mapped, "\u{3B8}", Unspecified),
    (0x1D752, 0x1D752, Mapped, "\u{3BA}", Unspecified),
    (0x1D753, 0x1D753, Mapped, "\u{3C6}", Unspecified),
    (0x1D754, 0x1D754, Mapped, "\u{3C1}", Unspecified),
    (0x1D755, 0x1D755, Mapped, "\u{3C0}", Unspecified),
    (0x1D756, 0x1D756, Mapped, "\u{3B1}", Unspecified),
    (0x1D757, 0x1D757, Mapped, "\u{3B2}", Unspecified),
    (0x1D758, 0x1D758, Mapped, "\u{3B3}", Unspecified),
    (0x1D759, 0x1D759, Mapped, "\u{3B4}", Unspecified),
    (0x1D75A, 0x1D75A, Mapped, "\u{3B5}", Unspecified),
    (0x1D75B, 0x1D75B, Mapped, "\u{3B6}", Unspecified),
    (0x1D75C, 0x1D75C, Mapped, "\u{3B7}", Unspecified),
    (0x1D75D, 0x1D75D, Mapped, "\u{3B8}", Unspecified),
    (0x1D75E, 0x1D75E, Mapped, "\u{3B9}", Unspecified),
    (0x1D75F, 0x1D75F, Mapped, "\u{3BA}", Unspecified),
    (0x1D760, 0x1D760, Mapped, "\u{3BB}", Unspecified),
    (0x1D761, 0x1D761, Mapped, "\u{3BC}", Unspecified),
    (0x1D762, 0x1D762, Mapped, "\u{3BD}", Unspecified),
    (0x1D763, 0x1D763, Mapped, "\u{3BE}", Unspecified),
    (0x1D764, 0x1D764, Mapped, "\u{3BF}", Unspecified),
    (0x1D765, 0x1D765, Mapped, "\u{3C0}", Unspecified),
    (0x1D766, 0x1D766, Mapped, "\u{3C1}", Unspecified),
    (0x1D767, 0x1D767, Mapped, "\u{3B8}", Unspecified),
    (0x1D768, 0x1D768, Mapped, "\u{3C3}", Unspecified),
    (0x1D769, 0x1D769, Mapped, "\u{3C4}", Unspecified),
    (0x1D76A, 0x1D76A, Mapped, "\u{3C5}", Unspecified),
    (0x1D76B, 0x1D76B, Mapped, "\u{3C6}", Unspecified),
    (0x1D76C, 0x1D76C, Mapped, "\u{3C7}", Unspecified),
    (0x1D76D, 0x1D76D, Mapped, "\u{3C8}", Unspecified),
    (0x1D76E, 0x1D76E, Mapped, "\u{3C9}", Unspecified),
    (0x1D76F, 0x1D76F, Mapped, "\u{2207}", Unspecified),
    (0x1D770, 0x1D770, Mapped, "\u{3B1}", Unspecified),
    (0x1D771, 0x1D771, Mapped, "\u{3B2}", Unspecified),
    (0x1D772, 0x1D772, Mapped, "\u{3B3}", Unspecified),
    (0x1D773, 0x1D773, Mapped, "\u{3B4}", Unspecified),
    (0x1D774, 0x1D774, Mapped, "\u{3B5}", Unspecified),
    (0x1D775, 0x1D775, Mapped, "\u{3B6}", Unspecified),
    (0x1D776, 0x1D776, Mapped, "\u{3B7}", Unspecified),
    (0x1D777, 0x1D777, Mapped, "\u{3B8}", Unspecified),
    (0x1D778, 0x1D778, Mapped, "\u{3B9}", Unspecified),
    (0x1D779, 0x1D779, Mapped, "\u{3BA}", Unspecified),
    (0x1D77A, 0x1D77A, Mapped, "\u{3BB}", Unspecified),
    (0x1D77B, 0x1D77B, Mapped, "\u{3BC}", Unspecified),
    (0x1D77C, 0x1D77C, Mapped, "\u{3BD}", Unspecified),
    (0x1D77D, 0x1D77D, Mapped, "\u{3BE}", Unspecified),
    (0x1D77E, 0x1D77E, Mapped, "\u{3BF}", Unspecified),
    (0x1D77F, 0x1D77F, Mapped, "\u{3C0}", Unspecified),
    (0x1D780, 0x1D780, Mapped, "\u{3C1}", Unspecified),
    (0x1D781, 0x1D782, Mapped, "\u{3C3}", Unspecified),
    (0x1D783, 0x1D783, Mapped, "\u{3C4}", Unspecified),
    (0x1D784, 0x1D784, Mapped, "\u{3C5}", Unspecified),
    (0x1D785, 0x1D785, Mapped, "\u{3C6}", Unspecified),
    (0x1D786, 0x1D786, Mapped, "\u{3C7}", Unspecified),
    (0x1D787, 0x1D787, Mapped, "\u{3C8}", Unspecified),
    (0x1D788, 0x1D788, Mapped, "\u{3C9}", Unspecified),
    (0x1D789, 0x1D789, Mapped, "\u{2202}", Unspecified),
    (0x1D78A, 0x1D78A, Mapped, "\u{3B5}", Unspecified),
    (0x1D78B, 0x1D78B, Mapped, "\u{3B8}", Unspecified),
    (0x1D78C, 0x1D78C, Mapped, "\u{3BA}", Unspecified),
    (0x1D78D, 0x1D78D, Mapped, "\u{3C6}", Unspecified),
    (0x1D78E, 0x1D78E, Mapped, "\u{3C1}", Unspecified),
    (0x1D78F, 0x1D78F, Mapped, "\u{3C0}", Unspecified),
    (0x1D790, 0x1D790, Mapped, "\u{3B1}", Unspecified),
    (0x1D791, 0x1D791, Mapped, "\u{3B2}", Unspecified),
    (0x1D792, 0x1D792, Mapped, "\u{3B3}", Unspecified),
    (0x1D793, 0x1D793, Mapped, "\u{3B4}", Unspecified),
    (0x1D794, 0x1D794, Mapped, "\u{3B5}", Unspecified),
    (0x1D795, 0x1D795, Mapped, "\u{3B6}", Unspecified),
    (0x1D796, 0x1D796, Mapped, "\u{3B7}", Unspecified),
    (0x1D797, 0x1D797, Mapped, "\u{3B8}", Unspecified),
    (0x1D798, 0x1D798, Mapped, "\u{3B9}", Unspecified),
    (0x1D799, 0x1D799, Mapped, "\u{3BA}", Unspecified),
    (0x1D79A, 0x1D79A, Mapped, "\u{3BB}", Unspecified),
    (0x1D79B, 0x1D79B, Mapped, "\u{3BC}", Unspecified),
    (0x1D79C, 0x1D79C, Mapped, "\u{3BD}", Unspecified),
    (0x1D79D, 0x1D79D, Mapped, "\u{3BE}", Unspecified),
    (0x1D79E, 0x1D79E, Mapped, "\u{3BF}", Unspecified),
    (0x1D79F, 0x1D79F, Mapped, "\u{3C0}", Unspecified),
    (0x1D7A0, 0x1D7A0, Mapped, "\u{3C1}", Unspecified),
    (0x1D7A1, 0x1D7A1, Mapped, "\u{3B8}", Unspecified),
    (0x1D7A2, 0x1D7A2, Mapped, "\u{3C3}", Unspecified),
    (0x1D7A3, 0x1D7A3, Mapped, "\u{3C4}", Unspecified),
    (0x1D7A4, 0x1D7A4, Mapped, "\u{3C5}", Unspecified),
    (0x1D7A5, 0x1D7A5, Mapped, "\u{3C6}", Unspecified),
    (0x1D7A6, 0x1D7A6, Mapped, "\u{3C7}", Unspecified),
    (0x1D7A7, 0x1D7A7, Mapped, "\u{3C8}", Unspecified),
    (0x1D7A8, 0x1D7A8, Mapped, "\u{3C9}", Unspecified),
    (0x1D7A9, 0x1D7A9, Mapped, "\u{2207}", Unspecified),
    (0x1D7AA, 0x1D7AA, Mapped, "\u{3B1}", Unspecified),
    (0x1D7AB, 0x1D7AB, Mapped, "\u{3B2}", Unspecified),
    (0x1D7AC, 0x1D7AC, Mapped, "\u{3B3}", Unspecified),
    (0x1D7AD, 0x1D7AD, Mapped, "\u{3B4}", Unspecified),
    (0x1D7AE, 0x1D7AE, Mapped, "\u{3B5}", Unspecified),
    (0x1D7AF, 0x1D7AF, Mapped, "\u{3B6}", Unspecified),
    (0x1D7B0, 0x1D7B0, Mapped, "\u{3B7}", Unspecified),
    (0x1D7B1, 0x1D7B1, Mapped, "\u{3B8}", Unspecified),
    (0x1D7B2, 0x1D7B2, Mapped, "\u{3B9}", Unspecified),
    (0x1D7B3, 0x1D7B3, Mapped, "\u{3BA}", Unspecified),
    (0x1D7B4, 0x1D7B4, Mapped, "\u{3BB}", Unspecified),
    (0x1D7B5, 0x1D7B5, Mapped, "\u{3BC}", Unspecified),
    (0x1D7B6, 0x1D7B6, Mapped, "\u{3BD}", Unspecified),
    (0x1D7B7, 0x1D7B7, Mapped, "\u{3BE}", Unspecified),
    (0x1D7B8, 0x1D7B8, Mapped, "\u{3BF}", Unspecified),
    (0x1D7B9, 0x1D7B9, Mapped, "\u{3C0}", Unspecified),
    (0x1D7BA, 0x1D7BA, Mapped, "\u{3C1}", Unspecified),
    (0x1D7BB, 0x1D7BC, Mapped, "\u{3C3}", Unspecified),
    (0x1D7BD, 0x1D7BD, Mapped, "\u{3C4}", Unspecified),
    (0x1D7BE, 0x1D7BE, Mapped, "\u{3C5}", Unspecified),
    (0x1D7BF, 0x1D7BF, Mapped, "\u{3C6}", Unspecified),
    (0x1D7C0, 0x1D7C0, Mapped, "\u{3C7}", Unspecified),
    (0x1D7C1, 0x1D7C1, Mapped, "\u{3C8}", Unspecified),
    (0x1D7C2, 0x1D7C2, Mapped, "\u{3C9}", Unspecified),
    (0x1D7C3, 0x1D7C3, Mapped, "\u{2202}", Unspecified),
    (0x1D7C4, 0x1D7C4, Mapped, "\u{3B5}", Unspecified),
    (0x1D7C5, 0x1D7C5, Mapped, "\u{3B8}", Unspecified),
    (0x1D7C6, 0x1D7C6, Mapped, "\u{3BA}", Unspecified),
    (0x1D7C7, 0x1D7C7, Mapped, "\u{3C6}", Unspecified),
    (0x1D7C8, 0x1D7C8, Mapped, "\u{3C1}", Unspecified),
    (0x1D7C9, 0x1D7C9, Mapped, "\u{3C0}", Unspecified),
    (0x1D7CA, 0x1D7CB, Mapped, "\u{3DD}", Unspecified),
    (0x1D7CC, 0x1D7CD, Disallowed, "", Unspecified),
    (0x1D7CE, 0x1D7CE, Mapped, "0", Unspecified),
    (0x1D7CF, 0x1D7CF, Mapped, "1", Unspecified),
    (0x1D7D0, 0x1D7D0, Mapped, "2", Unspecified),
    (0x1D7D1, 0x1D7D1, Mapped, "3", Unspecified),
    (0x1D7D2, 0x1D7D2, Mapped, "4", Unspecified),
    (0x1D7D3, 0x1D7D3, Mapped, "5", Unspecified),
    (0x1D7D4, 0x1D7D4, Mapped, "6", Unspecified),
    (0x1D7D5, 0x1D7D5, Mapped, "7", Unspecified),
    (0x1D7D6, 0x1D7D6, Mapped, "8", Unspecified),
    (0x1D7D7, 0x1D7D7, Mapped, "9", Unspecified),
    (0x1D7D8, 0x1D7D8, Mapped, "0", Unspecified),
    (0x1D7D9, 0x1D7D9, Mapped, "1", Unspecified),
    (0x1D7DA, 0x1D7DA, Mapped, "2", Unspecified),
    (0x1D7DB, 0x1D7DB, Mapped, "3", Unspecified),
    (0x1D7DC, 0x1D7DC, Mapped, "4", Unspecified),
    (0x1D7DD, 0x1D7DD, Mapped, "5", Unspecified),
    (0x1D7DE, 0x1D7DE, Mapped, "6", Unspecified),
    (0x1D7DF, 0x1D7DF, Mapped, "7", Unspecified),
    (0x1D7E0, 0x1D7E0, Mapped, "8", Unspecified),
    (0x1D7E1, 0x1D7E1, Mapped, "9", Unspecified),
    (0x1D7E2, 0x1D7E2, Mapped, "0", Unspecified),
    (0x1D7E3, 0x1D7E3, Mapped, "1", Unspecified),
    (0x1D7E4, 0x1D7E4, Mapped, "2", Unspecified),
    (0x1D7E5, 0x1D7E5, Mapped, "3", Unspecified),
    (0x1D7E6, 0x1D7E6, Mapped, "4", Unspecified),
    (0x1D7E7, 0x1D7E7, Mapped, "5", Unspecified),
    (0x1D7E8, 0x1D7E8, Mapped, "6", Unspecified),
    (0x1D7E9, 0x1D7E9, Mapped, "7", Unspecified),
    (0x1D7EA, 0x1D7EA, Mapped, "8", Unspecified),
    (0x1D7EB, 0x1D7EB, Mapped, "9", Unspecified),
    (0x1D7EC, 0x1D7EC, Mapped, "0", Unspecified),
    (0x1D7ED, 0x1D7ED, Mapped, "1", Unspecified),
    (0x1D7EE, 0x1D7EE, Mapped, "2", Unspecified),
    (0x1D7EF, 0x1D7EF, Mapped, "3", Unspecified),
    (0x1D7F0, 0x1D7F0, Mapped, "4", Unspecified),
    (0x1D7F1, 0x1D7F1, Mapped, "5", Unspecified),
    (0x1D7F2, 0x1D7F2, Mapped, "6", Unspecified),
    (0x1D7F3, 0x1D7F3, Mapped, "7", Unspecified),
    (0x1D7F4, 0x1D7F4, Mapped, "8", Unspecified),
    (0x1D7F5, 0x1D7F5, Mapped, "9", Unspecified),
    (0x1D7F6, 0x1D7F6, Mapped, "0", Unspecified),
    (0x1D7F7, 0x1D7F7, Mapped, "1", Unspecified),
    (0x1D7F8, 0x1D7F8, Mapped, "2", Unspecified),
    (0x1D7F9, 0x1D7F9, Mapped, "3", Unspecified),
    (0x1D7FA, 0x1D7FA, Mapped, "4", Unspecified),
    (0x1D7FB, 0x1D7FB, Mapped, "5", Unspecified),
    (0x1D7FC, 0x1D7FC, Mapped, "6", Unspecified),
    (0x1D7FD, 0x1D7FD, Mapped, "7", Unspecified),
    (0x1D7FE, 0x1D7FE, Mapped, "8", Unspecified),
    (0x1D7FF, 0x1D7FF, Mapped, "9", Unspecified),
    (0x1D800, 0x1D9FF, Valid, "", Nv8),
    (0x1DA00, 0x1DA36, Valid, "", Unspecified),
    (0x1DA37, 0x1DA3A, Valid, "", Nv8),
    (0x1DA3B, 0x1DA6C, Valid, "", Unspecified),
    (0x1DA6D, 0x1DA74, Valid, "", Nv8),
    (0x1DA75, 0x1DA75, Valid, "", Unspecified),
    (0x1DA76, 0x1DA83, Valid, "", Nv8),
    (0x1DA84, 0x1DA84, Valid, "", Unspecified),
    (0x1DA85, 0x1DA8B, Valid, "", Nv8),
    (0x1DA8C, 0x1DA9A, Disallowed, "", Unspecified),
    (0x1DA9B, 0x1DA9F, Valid, "", Unspecified),
    (0x1DAA0, 0x1DAA0, Disallowed, "", Unspecified),
    (0x1DAA1, 0x1DAAF, Valid, "", Unspecified),
    (0x1DAB0, 0x1DFFF, Disallowed, "", Unspecified),
    (0x1E000, 0x1E006, Valid, "", Unspecified),
    (0x1E007, 0x1E007, Disallowed, "", Unspecified),
    (0x1E008, 0x1E018, Valid, "", Unspecified),
    (0x1E019, 0x1E01A, Disallowed, "", Unspecified),
    (0x1E01B, 0x1E021, Valid, "", Unspecified),
    (0x1E022, 0x1E022, Disallowed, "", Unspecified),
    (0x1E023, 0x1E024, Valid, "", Unspecified),
    (0x1E025, 0x1E025, Disallowed, "", Unspecified),
    (0x1E026, 0x1E02A, Valid, "", Unspecified),
    (0x1E02B, 0x1E0FF, Disallowed, "", Unspecified),
    (0x1E100, 0x1E12C, Valid, "", Unspecified),
    (0x1E12D, 0x1E12F, Disallowed, "", Unspecified),
    (0x1E130, 0x1E13D, Valid, "", Unspecified),
    (0x1E13E, 0x1E13F, Disallowed, "", Unspecified),
    (0x1E140, 0x1E149, Valid, "", Unspecified),
    (0x1E14A, 0x1E14D, Disallowed, "", Unspecified),
    (0x1E14E, 0x1E14E, Valid, "", Unspecified),
    (0x1E14F, 0x1E14F, Valid, "", Nv8),
    (0x1E150, 0x1E2BF, Disallowed, "", Unspecified),
    (0x1E2C0, 0x1E2F9, Valid, "", Unspecified),
    (0x1E2FA, 0x1E2FE, Disallowed, "", Unspecified),
    (0x1E2FF, 0x1E2FF, Valid, "", Nv8),
    (0x1E300, 0x1E7FF, Disallowed, "", Unspecified),
    (0x1E800, 0x1E8C4, Valid, "", Unspecified),
    (0x1E8C5, 0x1E8C6, Disallowed, "", Unspecified),
    (0x1E8C7, 0x1E8CF, Valid, "", Nv8),
    (0x1E8D0, 0x1E8D6, Valid, "", Unspecified),
    (0x1E8D7, 0x1E8FF, Disallowed, "", Unspecified),
    (0x1E900, 0x1E900, Mapped, "\u{1E922}", Unspecified),
    (0x1E901, 0x1E901, Mapped, "\u{1E923}", Unspecified),
    (0x1E902, 0x1E902, Mapped, "\u{1E924}", Unspecified),
    (0x1E903, 0x1E903, Mapped, "\u{1E925}", Unspecified),
    (0x1E904, 0x1E904, Mapped, "\u{1E926}", Unspecified),
    (0x1E905, 0x1E905, Mapped, "\u{1E927}", Unspecified),
    (0x1E906, 0x1E906, Mapped, "\u{1E928}", Unspecified),
    (0x1E907, 0x1E907, Mapped, "\u{1E929}", Unspecified),
    (0x1E908, 0x1E908, Mapped, "\u{1E92A}", Unspecified),
    (0x1E909, 0x1E909, Mapped, "\u{1E92B}", Unspecified),
    (0x1E90A, 0x1E90A, Mapped, "\u{1E92C}", Unspecified),
    (0x1E90B, 0x1E90B, Mapped, "\u{1E92D}", Unspecified),
    (0x1E90C, 0x1E90C, Mapped, "\u{1E92E}", Unspecified),
    (0x1E90D, 0x1E90D, Mapped, "\u{1E92F}", Unspecified),
    (0x1E90E, 0x1E90E, Mapped, "\u{1E930}", Unspecified),
    (0x1E90F, 0x1E90F, Mapped, "\u{1E931}", Unspecified),
    (0x1E910, 0x1E910, Mapped, "\u{1E932}", Unspecified),
    (0x1E911, 0x1E911, Mapped, "\u{1E933}", Unspecified),
    (0x1E912, 0x1E912, Mapped, "\u{1E934}", Unspecified),
    (0x1E913, 0x1E913, Mapped, "\u{1E935}", Unspecified),
    (0x1E914, 0x1E914, Mapped, "\u{1E936}", Unspecified),
    (0x1E915, 0x1E915, Mapped, "\u{1E937}", Unspecified),
    (0x1E916, 0x1E916, Mapped, "\u{1E938}", Unspecified),
    (0x1E917, 0x1E917, Mapped, "\u{1E939}", Unspecified),
    (0x1E918, 0x1E918, Mapped, "\u{1E93A}", Unspecified),
    (0x1E919, 0x1E919, Mapped, "\u{1E93B}", Unspecified),
    (0x1E91A, 0x1E91A, Mapped, "\u{1E93C}", Unspecified),
    (0x1E91B, 0x1E91B, Mapped, "\u{1E93D}", Unspecified),
    (0x1E91C, 0x1E91C, Mapped, "\u{1E93E}", Unspecified),
    (0x1E91D, 0x1E91D, Mapped, "\u{1E93F}", Unspecified),
    (0x1E91E, 0x1E91E, Mapped, "\u{1E940}", Unspecified),
    (0x1E91F, 0x1E91F, Mapped, "\u{1E941}", Unspecified),
    (0x1E920, 0x1E920, Mapped, "\u{1E942}", Unspecified),
    (0x1E921, 0x1E921, Mapped, "\u{1E943}", Unspecified),
    (0x1E922, 0x1E94B, Valid, "", Unspecified),
    (0x1E94C, 0x1E94F, Disallowed, "", Unspecified),
    (0x1E950, 0x1E959, Valid, "", Unspecified),
    (0x1E95A, 0x1E95D, Disallowed, "", Unspecified),
    (0x1E95E, 0x1E95F, Valid, "", Nv8),
    (0x1E960, 0x1EC70, Disallowed, "", Unspecified),
    (0x1EC71, 0x1ECB4, Valid, "", Nv8),
    (0x1ECB5, 0x1ED00, Disallowed, "", Unspecified),
    (0x1ED01, 0x1ED3D, Valid, "", Nv8),
    (0x1ED3E, 0x1EDFF, Disallowed, "", Unspecified),
    (0x1EE00, 0x1EE00, Mapped, "\u{627}", Unspecified),
    (0x1EE01, 0x1EE01, Mapped, "\u{628}", Unspecified),
    (0x1EE02, 0x1EE02, Mapped, "\u{62C}", Unspecified),
    (0x1EE03, 0x1EE03, Mapped, "\u{62F}", Unspecified),
    (0x1EE04, 0x1EE04, Disallowed, "", Unspecified),
    (0x1EE05, 0x1EE05, Mapped, "\u{648}", Unspecified),
    (0x1EE06, 0x1EE06, Mapped, "\u{632}", Unspecified),
    (0x1EE07, 0x1EE07, Mapped, "\u{62D}", Unspecified),
    (0x1EE08, 0x1EE08, Mapped, "\u{637}", Unspecified),
    (0x1EE09, 0x1EE09, Mapped, "\u{64A}", Unspecified),
    (0x1EE0A, 0x1EE0A, Mapped, "\u{643}", Unspecified),
    (0x1EE0B, 0x1EE0B, Mapped, "\u{644}", Unspecified),
    (0x1EE0C, 0x1EE0C, Mapped, "\u{645}", Unspecified),
    (0x1EE0D, 0x1EE0D, Mapped, "\u{646}", Unspecified),
    (0x1EE0E, 0x1EE0E, Mapped, "\u{633}", Unspecified),
    (0x1EE0F, 0x1EE0F, Mapped, "\u{639}", Unspecified),
    (0x1EE10, 0x1EE10, Mapped, "\u{641}", Unspecified),
    (0x1EE11, 0x1EE11, Mapped, "\u{635}", Unspecified),
    (0x1EE12, 0x1EE12, Mapped, "\u{642}", Unspecified),
    (0x1EE13, 0x1EE13, Mapped, "\u{631}", Unspecified),
    (0x1EE14, 0x1EE14, Mapped, "\u{634}", Unspecified),
    (0x1EE15, 0x1EE15, Mapped, "\u{62A}", Unspecified),
    (0x1EE16, 0x1EE16, Mapped, "\u{62B}", Unspecified),
    (0x1EE17, 0x1EE17, Mapped, "\u{62E}", Unspecified),
    (0x1EE18, 0x1EE18, Mapped, "\u{630}", Unspecified),
    (0x1EE19, 0x1EE19, Mapped, "\u{636}", Unspecified),
    (0x1EE1A, 0x1EE1A, Mapped, "\u{638}", Unspecified),
    (0x1EE1B, 0x1EE1B, Mapped, "\u{63A}", Unspecified),
    (0x1EE1C, 0x1EE1C, Mapped, "\u{66E}", Unspecified),
    (0x1EE1D, 0x1EE1D, Mapped, "\u{6BA}", Unspecified),
    (0x1EE1E, 0x1EE1E, Mapped, "\u{6A1}", Unspecified),
    (0x1EE1F, 0x1EE1F, Mapped, "\u{66F}", Unspecified),
    (0x1EE20, 0x1EE20, Disallowed, "", Unspecified),
    (0x1EE21, 0x1EE21, Mapped, "\u{628}", Unspecified),
    (0x1EE22, 0x1EE22, Mapped, "\u{62C}", Unspecified),
    (0x1EE23, 0x1EE23, Disallowed, "", Unspecified),
    (0x1EE24, 0x1EE24, Mapped, "\u{647}", Unspecified),
    (0x1EE25, 0x1EE26, Disallowed, "", Unspecified),
    (0x1EE27, 0x1EE27, Mapped, "\u{62D}", Unspecified),
    (0x1EE28, 0x1EE28, Disallowed, "", Unspecified),
    (0x1EE29, 0x1EE29, Mapped, "\u{64A}", Unspecified),
    (0x1EE2A, 0x1EE2A, Mapped, "\u{643}", Unspecified),
    (0x1EE2B, 0x1EE2B, Mapped, "\u{644}", Unspecified),
    (0x1EE2C, 0x1EE2C, Mapped, "\u{645}", Unspecified),
    (0x1EE2D, 0x1EE2D, Mapped, "\u{646}", Unspecified),
    (0x1EE2E, 0x1EE2E, Mapped, "\u{633}", Unspecified),
    (0x1EE2F, 0x1EE2F, Mapped, "\u{639}", Unspecified),
    (0x1EE30, 0x1EE30, Mapped, "\u{641}", Unspecified),
    (0x1EE31, 0x1EE31, Mapped, "\u{635}", Unspecified),
    (0x1EE32, 0x1EE32, Mapped, "\u{642}", Unspecified),
    (0x1EE33, 0x1EE33, Disallowed, "", Unspecified),
    (0x1EE34, 0x1EE34, Mapped, "\u{634}", Unspecified),
    (0x1EE35, 0x1EE35, Mapped, "\u{62A}", Unspecified),
    (0x1EE36, 0x1EE36, Mapped, "\u{62B}", Unspecified),
    (0x1EE37, 0x1EE37, Mapped, "\u{62E}", Unspecified),
    (0x1EE38, 0x1EE38, Disallowed, "", Unspecified),
    (0x1EE39, 0x1EE39, Mapped, "\u{636}", Unspecified),
    (0x1EE3A, 0x1EE3A, Disallowed, "", Unspecified),
    (0x1EE3B, 0x1EE3B, Mapped, "\u{63A}", Unspecified),
    (0x1EE3C, 0x1EE41, Disallowed, "", Unspecified),
    (0x1EE42, 0x1EE42, Mapped, "\u{62C}", Unspecified),
    (0x1EE43, 0x1EE46, Disallowed, "", Unspecified),
    (0x1EE47, 0x1EE47, Mapped, "\u{62D}", Unspecified),
    (0x1EE48, 0x1EE48, Disallowed, "", Unspecified),
    (0x1EE49, 0x1EE49, Mapped, "\u{64A}", Unspecified),
    (0x1EE4A, 0x1EE4A, Disallowed, "", Unspecified),
    (0x1EE4B, 0x1EE4B, Mapped, "\u{644}", Unspecified),
    (0x1EE4C, 0x1EE4C, Disallowed, "", Unspecified),
    (0x1EE4D, 0x1EE4D, Mapped, "\u{646}", Unspecified),
    (0x1EE4E, 0x1EE4E, Mapped, "\u{633}", Unspecified),
    (0x1EE4F, 0x1EE4F, Mapped, "\u{639}", Unspecified),
    (0x1EE50, 0x1EE50, Disallowed, "", Unspecified),
    (0x1EE51, 0x1EE51, Mapped, "\u{635}", Unspecified),
    (0x1EE52, 0x1EE52, Mapped, "\u{642}", Unspecified),
    (0x1EE53, 0x1EE53, Disallowed, "", Unspecified),
    (0x1EE54, 0x1EE54, Mapped, "\u{634}", Unspecified),
    (0x1EE55, 0x1EE56, Disallowed, "", Unspecified),
    (0x1EE57, 0x1EE57, Mapped, "\u{62E}", Unspecified),
    (0x1EE58, 0x1EE58, Disallowed, "", Unspecified),
    (0x1EE59, 0x1EE59, Mapped, "\u{636}", Unspecified),
    (0x1EE5A, 0x1EE5A, Disallowed, "", Unspecified),
    (0x1EE5B, 0x1EE5B, Mapped, "\u{63A}", Unspecified),
    (0x1EE5C, 0x1EE5C, Disallowed, "", Unspecified),
    (0x1EE5D, 0x1EE5D, Mapped, "\u{6BA}", Unspecified),
    (0x1EE5E, 0x1EE5E, Disallowed, "", Unspecified),
    (0x1EE5F, 0x1EE5F, Mapped, "\u{66F}", Unspecified),
    (0x1EE60, 0x1EE60, Disallowed, "", Unspecified),
    (0x1EE61, 0x1EE61, Mapped, "\u{628}", Unspecified),
    (0x1EE62, 0x1EE62, Mapped, "\u{62C}", Unspecified),
    (0x1EE63, 0x1EE63, Disallowed, "", Unspecified),
    (0x1EE64, 0x1EE64, Mapped, "\u{647}", Unspecified),
    (0x1EE65, 0x1EE66, Disallowed, "", Unspecified),
    (0x1EE67, 0x1EE67, Mapped, "\u{62D}", Unspecified),
    (0x1EE68, 0x1EE68, Mapped, "\u{637}", Unspecified),
    (0x1EE69, 0x1EE69, Mapped, "\u{64A}", Unspecified),
    (0x1EE6A, 0x1EE6A, Mapped, "\u{643}", Unspecified),
    (0x1EE6B, 0x1EE6B, Disallowed, "", Unspecified),
    (0x1EE6C, 0x1EE6C, Mapped, "\u{645}", Unspecified),
    (0x1EE6D, 0x1EE6D, Mapped, "\u{646}", Unspecified),
    (0x1EE6E, 0x1EE6E, Mapped, "\u{633}", Unspecified),
    (0x1EE6F, 0x1EE6F, Mapped, "\u{639}", Unspecified),
    (0x1EE70, 0x1EE70, Mapped, "\u{641}", Unspecified),
    (0x1EE71, 0x1EE71, Mapped, "\u{635}", Unspecified),
    (0x1EE72, 0x1EE72, Mapped, "\u{642}", Unspecified),
    (0x1EE73, 0x1EE73, Disallowed, "", Unspecified),
    (0x1EE74, 0x1EE74, Mapped, "\u{634}", Unspecified),
    (0x1EE75, 0x1EE75, Mapped, "\u{62A}", Unspecified),
    (0x1EE76, 0x1EE76, Mapped, "\u{62B}", Unspecified),
    (0x1EE77, 0x1EE77, Mapped, "\u{62E}", Unspecified),
    (0x1EE78, 0x1EE78, Disallowed, "", Unspecified),
    (0x1EE79, 0x1EE79, Mapped, "\u{636}", Unspecified),
    (0x1EE7A, 0x1EE7A, Mapped, "\u{638}", Unspecified),
    (0x1EE7B, 0x1EE7B, Mapped, "\u{63A}", Unspecified),
    (0x1EE7C, 0x1EE7C, Mapped, "\u{66E}", Unspecified),
    (0x1EE7D, 0x1EE7D, Disallowed, "", Unspecified),
    (0x1EE7E, 0x1EE7E, Mapped, "\u{6A1}", Unspecified),
    (0x1EE7F, 0x1EE7F, Disallowed, "", Unspecified),
    (0x1EE80, 0x1EE80, Mapped, "\u{627}", Unspecified),
    (0x1EE81, 0x1EE81, Mapped, "\u{628}", Unspecified),
    (0x1EE82, 0x1EE82, Mapped, "\u{62C}", Unspecified),
    (0x1EE83, 0x1EE83, Mapped, "\u{62F}", Unspecified),
    (0x1EE84, 0x1EE84, Mapped, "\u{647}", Unspecified),
    (0x1EE85, 0x1EE85, Mapped, "\u{648}", Unspecified),
    (0x1EE86, 0x1EE86, Mapped, "\u{632}", Unspecified),
    (0x1EE87, 0x1EE87, Mapped, "\u{62D}", Unspecified),
    (0x1EE88, 0x1EE88, Mapped, "\u{637}", Unspecified),
    (0x1EE89, 0x1EE89, Mapped, "\u{64A}", Unspecified),
    (0x1EE8A, 0x1EE8A, Disallowed, "", Unspecified),
    (0x1EE8B, 0x1EE8B, Mapped, "\u{644}", Unspecified),
    (0x1EE8C, 0x1EE8C, Mapped, "\u{645}", Unspecified),
    (0x1EE8D, 0x1EE8D, Mapped, "\u{646}", Unspecified),
    (0x1EE8E, 0x1EE8E, Mapped, "\u{633}", Unspecified),
    (0x1EE8F, 0x1EE8F, Mapped, "\u{639}", Unspecified),
    (0x1EE90, 0x1EE90, Mapped, "\u{641}", Unspecified),
    (0x1EE91, 0x1EE91, Mapped, "\u{635}", Unspecified),
    (0x1EE92, 0x1EE92, Mapped, "\u{642}", Unspecified),
    (0x1EE93, 0x1EE93, Mapped, "\u{631}", Unspecified),
    (0x1EE94, 0x1EE94, Mapped, "\u{634}", Unspecified),
    (0x1EE95, 0x1EE95, Mapped, "\u{62A}", Unspecified),
    (0x1EE96, 0x1EE96, Mapped, "\u{62B}", Unspecified),
    (0x1EE97, 0x1EE97, Mapped, "\u{62E}", Unspecified),
    (0x1EE98, 0x1EE98, Mapped, "\u{630}", Unspecified),
    (0x1EE99, 0x1EE99, Mapped, "\u{636}", Unspecified),
    (0x1EE9A, 0x1EE9A, Mapped, "\u{638}", Unspecified),
    (0x1EE9B, 0x1EE9B, Mapped, "\u{63A}", Unspecified),
    (0x1EE9C, 0x1EEA0, Disallowed, "", Unspecified),
    (0x1EEA1, 0x1EEA1, Mapped, "\u{628}", Unspecified),
    (0x1EEA2, 0x1EEA2, Mapped, "\u{62C}", Unspecified),
    (0x1EEA3, 0x1EEA3, Mapped, "\u{62F}", Unspecified),
    (0x1EEA4, 0x1EEA4, Disallowed, "", Unspecified),
    (0x1EEA5, 0x1EEA5, Mapped, "\u{648}", Unspecified),
    (0x1EEA6, 0x1EEA6, Mapped, "\u{632}", Unspecified),
    (0x1EEA7, 0x1EEA7, Mapped, "\u{62D}", Unspecified),
    (0x1EEA8, 0x1EEA8, Mapped, "\u{637}", Unspecified),
    (0x1EEA9, 0x1EEA9, Mapped, "\u{64A}", Unspecified),
    (0x1EEAA, 0x1EEAA, Disallowed, "", Unspecified),
    (0x1EEAB, 0x1EEAB, Mapped, "\u{644}", Unspecified),
    (0x1EEAC, 0x1EEAC, Mapped, "\u{645}", Unspecified),
    (0x1EEAD, 0x1EEAD, Mapped, "\u{646}", Unspecified),
    (0x1EEAE, 0x1EEAE, Mapped, "\u{633}", Unspecified),
    (0x1EEAF, 0x1EEAF, Mapped, "\u{639}", Unspecified),
    (0x1EEB0, 0x1EEB0, Mapped, "\u{641}", Unspecified),
    (0x1EEB1, 0x1EEB1, Mapped, "\u{635}", Unspecified),
    (0x1EEB2, 0x1EEB2, Mapped, "\u{642}", Unspecified),
    (0x1EEB3, 0x1EEB3, Mapped, "\u{631}", Unspecified),
    (0x1EEB4, 0x1EEB4, Mapped, "\u{634}", Unspecified),
    (0x1EEB5, 0x1EEB5, Mapped, "\u{62A}", Unspecified),
    (0x1EEB6, 0x1EEB6, Mapped, "\u{62B}", Unspecified),
    (0x1EEB7, 0x1EEB7, Mapped, "\u{62E}", Unspecified),
    (0x1EEB8, 0x1EEB8, Mapped, "\u{630}", Unspecified),
    (0x1EEB9, 0x1EEB9, Mapped, "\u{636}", Unspecified),
    (0x1EEBA, 0x1EEBA, Mapped, "\u{638}", Unspecified),
    (0x1EEBB, 0x1EEBB, Mapped, "\u{63A}", Unspecified),
    (0x1EEBC, 0x1EEEF, Disallowed, "", Unspecified),
    (0x1EEF0, 0x1EEF1, Valid, "", Nv8),
    (0x1EEF2, 0x1EFFF, Disallowed, "", Unspecified),
    (0x1F000, 0x1F02B, Valid, "", Nv8),
    (0x1F02C, 0x1F02F, Disallowed, "", Unspecified),
    (0x1F030, 0x1F093, Valid, "", Nv8),
    (0x1F094, 0x1F09F, Disallowed, "", Unspecified),
    (0x1F0A0, 0x1F0AE, Valid, "", Nv8),
    (0x1F0AF, 0x1F0B0, Disallowed, "", Unspecified),
    (0x1F0B1, 0x1F0BF, Valid, "", Nv8),
    (0x1F0C0, 0x1F0C0, Disallowed, "", Unspecified),
    (0x1F0C1, 0x1F0CF, Valid, "", Nv8),
    (0x1F0D0, 0x1F0D0, Disallowed, "", Unspecified),
    (0x1F0D1, 0x1F0F5, Valid, "", Nv8),
    (0x1F0F6, 0x1F100, Disallowed, "", Unspecified),
    (0x1F101, 0x1F101, DisallowedStd3Mapped, "0,", Unspecified),
    (0x1F102, 0x1F102, DisallowedStd3Mapped, "1,", Unspecified),
    (0x1F103, 0x1F103, DisallowedStd3Mapped, "2,", Unspecified),
    (0x1F104, 0x1F104, DisallowedStd3Mapped, "3,", Unspecified),
    (0x1F105, 0x1F105, DisallowedStd3Mapped, "4,", Unspecified),
    (0x1F106, 0x1F106, DisallowedStd3Mapped, "5,", Unspecified),
    (0x1F107, 0x1F107, DisallowedStd3Mapped, "6,", Unspecified),
    (0x1F108, 0x1F108, DisallowedStd3Mapped, "7,", Unspecified),
    (0x1F109, 0x1F109, DisallowedStd3Mapped, "8,", Unspecified),
    (0x1F10A, 0x1F10A, DisallowedStd3Mapped, "9,", Unspecified),
    (0x1F10B, 0x1F10F, Valid, "", Nv8),
    (0x1F110, 0x1F110, DisallowedStd3Mapped, "(a)", Unspecified),
    (0x1F111, 0x1F111, DisallowedStd3Mapped, "(b)", Unspecified),
    (0x1F112, 0x1F112, DisallowedStd3Mapped, "(c)", Unspecified),
    (0x1F113, 0x1F113, DisallowedStd3Mapped, "(d)", Unspecified),
    (0x1F114, 0x1F114, DisallowedStd3Mapped, "(e)", Unspecified),
    (0x1F115, 0x1F115, DisallowedStd3Mapped, "(f)", Unspecified),
    (0x1F116, 0x1F116, DisallowedStd3Mapped, "(g)", Unspecified),
    (0x1F117, 0x1F117, DisallowedStd3Mapped, "(h)", Unspecified),
    (0x1F118, 0x1F118, DisallowedStd3Mapped, "(i)", Unspecified),
    (0x1F119, 0x1F119, DisallowedStd3Mapped, "(j)", Unspecified),
    (0x1F11A, 0x1F11A, DisallowedStd3Mapped, "(k)", Unspecified),
    (0x1F11B, 0x1F11B, DisallowedStd3Mapped, "(l)", Unspecified),
    (0x1F11C, 0x1F11C, DisallowedStd3Mapped, "(m)", Unspecified),
    (0x1F11D, 0x1F11D, DisallowedStd3Mapped, "(n)", Unspecified),
    (0x1F11E, 0x1F11E, DisallowedStd3Mapped, "(o)", Unspecified),
    (0x1F11F, 0x1F11F, DisallowedStd3Mapped, "(p)", Unspecified),
    (0x1F120, 0x1F120, DisallowedStd3Mapped, "(q)", Unspecified),
    (0x1F121, 0x1F121, DisallowedStd3Mapped, "(r)", Unspecified),
    (0x1F122, 0x1F122, DisallowedStd3Mapped, "(s)", Unspecified),
    (0x1F123, 0x1F123, DisallowedStd3Mapped, "(t)", Unspecified),
    (0x1F124, 0x1F124, DisallowedStd3Mapped, "(u)", Unspecified),
    (0x1F125, 0x1F125, DisallowedStd3Mapped, "(v)", Unspecified),
    (0x1F126, 0x1F126, DisallowedStd3Mapped, "(w)", Unspecified),
    (0x1F127, 0x1F127, DisallowedStd3Mapped, "(x)", Unspecified),
    (0x1F128, 0x1F128, DisallowedStd3Mapped, "(y)", Unspecified),
    (0x1F129, 0x1F129, DisallowedStd3Mapped, "(z)", Unspecified),
    (0x1F12A, 0x1F12A, Mapped, "\u{3014}s\u{3015}", Unspecified),
    (0x1F12B, 0x1F12B, Mapped, "c", Unspecified),
    (0x1F12C, 0x1F12C, Mapped, "r", Unspecified),
    (0x1F12D, 0x1F12D, Mapped, "cd", Unspecified),
    (0x1F12E, 0x1F12E, Mapped, "wz", Unspecified),
    (0x1F12F, 0x1F12F, Valid, "", Nv8),
    (0x1F130, 0x1F130, Mapped, "a", Unspecified),
    (0x1F131, 0x1F131, Mapped, "b", Unspecified),
    (0x1F132, 0x1F132, Mapped, "c", Unspecified),
    (0x1F133, 0x1F133, Mapped, "d", Unspecified),
    (0x1F134, 0x1F134, Mapped, "e", Unspecified),
    (0x1F135, 0x1F135, Mapped, "f", Unspecified),
    (0x1F136, 0x1F136, Mapped, "g", Unspecified),
    (0x1F137, 0x1F137, Mapped, "h", Unspecified),
    (0x1F138, 0x1F138, Mapped, "i", Unspecified),
    (0x1F139, 0x1F139, Mapped, "j", Unspecified),
    (0x1F13A, 0x1F13A, Mapped, "k", Unspecified),
    (0x1F13B, 0x1F13B, Mapped, "l", Unspecified),
    (0x1F13C, 0x1F13C, Mapped, "m", Unspecified),
    (0x1F13D, 0x1F13D, Mapped, "n", Unspecified),
    (0x1F13E, 0x1F13E, Mapped, "o", Unspecified),
    (0x1F13F, 0x1F13F, Mapped, "p", Unspecified),
    (0x1F140, 0x1F140, Mapped, "q", Unspecified),
    (0x1F141, 0x1F141, Mapped, "r", Unspecified),
    (0x1F142, 0x1F142, Mapped, "s", Unspecified),
    (0x1F143, 0x1F143, Mapped, "t", Unspecified),
    (0x1F144, 0x1F144, Mapped, "u", Unspecified),
    (0x1F145, 0x1F145, Mapped, "v", Unspecified),
    (0x1F146, 0x1F146, Mapped, "w", Unspecified),
    (0x1F147, 0x1F147, Mapped, "x", Unspecified),
    (0x1F148, 0x1F148, Mapped, "y", Unspecified),
    (0x1F149, 0x1F149, Mapped, "z", Unspecified),
    (0x1F14A, 0x1F14A, Mapped, "hv", Unspecified),
    (0x1F14B, 0x1F14B, Mapped, "mv", Unspecified),
    (0x1F14C, 0x1F14C, Mapped, "sd", Unspecified),
    (0x1F14D, 0x1F14D, Mapped, "ss", Unspecified),
    (0x1F14E, 0x1F14E, Mapped, "ppv", Unspecified),
    (0x1F14F, 0x1F14F, Mapped, "wc", Unspecified),
    (0x1F150, 0x1F169, Valid, "", Nv8),
    (0x1F16A, 0x1F16A, Mapped, "mc", Unspecified),
    (0x1F16B, 0x1F16B, Mapped, "md", Unspecified),
    (0x1F16C, 0x1F16C, Mapped, "mr", Unspecified),
    (0x1F16D, 0x1F18F, Valid, "", Nv8),
    (0x1F190, 0x1F190, Mapped, "dj", Unspecified),
    (0x1F191, 0x1F1AD, Valid, "", Nv8),
    (0x1F1AE, 0x1F1E5, Disallowed, "", Unspecified),
    (0x1F1E6, 0x1F1FF, Valid, "", Nv8),
    (0x1F200, 0x1F200, Mapped, "\u{307B}\u{304B}", Unspecified),
    (0x1F201, 0x1F201, Mapped, "\u{30B3}\u{30B3}", Unspecified),
    (0x1F202, 0x1F202, Mapped, "\u{30B5}", Unspecified),
    (0x1F203, 0x1F20F, Disallowed, "", Unspecified),
    (0x1F210, 0x1F210, Mapped, "\u{624B}", Unspecified),
    (0x1F211, 0x1F211, Mapped, "\u{5B57}", Unspecified),
    (0x1F212, 0x1F212, Mapped, "\u{53CC}", Unspecified),
    (0x1F213, 0x1F213, Mapped, "\u{30C7}", Unspecified),
    (0x1F214, 0x1F214, Mapped, "\u{4E8C}", Unspecified),
    (0x1F215, 0x1F215, Mapped, "\u{591A}", Unspecified),
    (0x1F216, 0x1F216, Mapped, "\u{89E3}", Unspecified),
    (0x1F217, 0x1F217, Mapped, "\u{5929}", Unspecified),
    (0x1F218, 0x1F218, Mapped, "\u{4EA4}", Unspecified),
    (0x1F219, 0x1F219, Mapped, "\u{6620}", Unspecified),
    (0x1F21A, 0x1F21A, Mapped, "\u{7121}", Unspecified),
    (0x1F21B, 0x1F21B, Mapped, "\u{6599}", Unspecified),
    (0x1F21C, 0x1F21C, Mapped, "\u{524D}", Unspecified),
    (0x1F21D, 0x1F21D, Mapped, "\u{5F8C}", Unspecified),
    (0x1F21E, 0x1F21E, Mapped, "\u{518D}", Unspecified),
    (0x1F21F, 0x1F21F, Mapped, "\u{65B0}", Unspecified),
    (0x1F220, 0x1F220, Mapped, "\u{521D}", Unspecified),
    (0x1F221, 0x1F221, Mapped, "\u{7D42}", Unspecified),
    (0x1F222, 0x1F222, Mapped, "\u{751F}", Unspecified),
    (0x1F223, 0x1F223, Mapped, "\u{8CA9}", Unspecified),
    (0x1F224, 0x1F224, Mapped, "\u{58F0}", Unspecified),
    (0x1F225, 0x1F225, Mapped, "\u{5439}", Unspecified),
    (0x1F226, 0x1F226, Mapped, "\u{6F14}", Unspecified),
    (0x1F227, 0x1F227, Mapped, "\u{6295}", Unspecified),
    (0x1F228, 0x1F228, Mapped, "\u{6355}", Unspecified),
    (0x1F229, 0x1F229, Mapped, "\u{4E00}", Unspecified),
    (0x1F22A, 0x1F22A, Mapped, "\u{4E09}", Unspecified),
    (0x1F22B, 0x1F22B, Mapped, "\u{904A}", Unspecified),
    (0x1F22C, 0x1F22C, Mapped, "\u{5DE6}", Unspecified),
    (0x1F22D, 0x1F22D, Mapped, "\u{4E2D}", Unspecified),
    (0x1F22E, 0x1F22E, Mapped, "\u{53F3}", Unspecified),
    (0x1F22F, 0x1F22F, Mapped, "\u{6307}", Unspecified),
    (0x1F230, 0x1F230, Mapped, "\u{8D70}", Unspecified),
    (0x1F231, 0x1F231, Mapped, "\u{6253}", Unspecified),
    (0x1F232, 0x1F232, Mapped, "\u{7981}", Unspecified),
    (0x1F233, 0x1F233, Mapped, "\u{7A7A}", Unspecified),
    (0x1F234, 0x1F234, Mapped, "\u{5408}", Unspecified),
    (0x1F235, 0x1F235, Mapped, "\u{6E80}", Unspecified),
    (0x1F236, 0x1F236, Mapped, "\u{6709}", Unspecified),
    (0x1F237, 0x1F237, Mapped, "\u{6708}", Unspecified),
    (0x1F238, 0x1F238, Mapped, "\u{7533}", Unspecified),
    (0x1F239, 0x1F239, Mapped, "\u{5272}", Unspecified),
    (0x1F23A, 0x1F23A, Mapped, "\u{55B6}", Unspecified),
    (0x1F23B, 0x1F23B, Mapped, "\u{914D}", Unspecified),
    (0x1F23C, 0x1F23F, Disallowed, "", Unspecified),
    (0x1F240, 0x1F240, Mapped, "\u{3014}\u{672C}\u{3015}", Unspecified),
    (0x1F241, 0x1F241, Mapped, "\u{3014}\u{4E09}\u{3015}", Unspecified),
    (0x1F242, 0x1F242, Mapped, "\u{3014}\u{4E8C}\u{3015}", Unspecified),
    (0x1F243, 0x1F243, Mapped, "\u{3014}\u{5B89}\u{3015}", Unspecified),
    (0x1F244, 0x1F244, Mapped, "\u{3014}\u{70B9}\u{3015}", Unspecified),
    (0x1F245, 0x1F245, Mapped, "\u{3014}\u{6253}\u{3015}", Unspecified),
    (0x1F246, 0x1F246, Mapped, "\u{3014}\u{76D7}\u{3015}", Unspecified),
    (0x1F247, 0x1F247, Mapped, "\u{3014}\u{52DD}\u{3015}", Unspecified),
    (0x1F248, 0x1F248, Mapped, "\u{3014}\u{6557}\u{3015}", Unspecified),
    (0x1F249, 0x1F24F, Disallowed, "", Unspecified),
    (0x1F250, 0x1F250, Mapped, "\u{5F97}", Unspecified),
    (0x1F251, 0x1F251, Mapped, "\u{53EF}", Unspecified),
    (0x1F252, 0x1F25F, Disallowed, "", Unspecified),
    (0x1F260, 0x1F265, Valid, "", Nv8),
    (0x1F266, 0x1F2FF, Disallowed, "", Unspecified),
    (0x1F300, 0x1F6D7, Valid, "", Nv8),
    (0x1F6D8, 0x1F6DF, Disallowed, "", Unspecified),
    (0x1F6E0, 0x1F6EC, Valid, "", Nv8),
    (0x1F6ED, 0x1F6EF, Disallowed, "", Unspecified),
    (0x1F6F0, 0x1F6FC, Valid, "", Nv8),
    (0x1F6FD, 0x1F6FF, Disallowed, "", Unspecified),
    (0x1F700, 0x1F773, Valid, "", Nv8),
    (0x1F774, 0x1F77F, Disallowed, "", Unspecified),
    (0x1F780, 0x1F7D8, Valid, "", Nv8),
    (0x1F7D9, 0x1F7DF, Disallowed, "", Unspecified),
    (0x1F7E0, 0x1F7EB, Valid, "", Nv8),
    (0x1F7EC, 0x1F7FF, Disallowed, "", Unspecified),
    (0x1F800, 0x1F80B, Valid, "", Nv8),
    (0x1F80C, 0x1F80F, Disallowed, "", Unspecified),
    (0x1F810, 0x1F847, Valid, "", Nv8),
    (0x1F848, 0x1F84F, Disallowed, "", Unspecified),
    (0x1F850, 0x1F859, Valid, "", Nv8),
    (0x1F85A, 0x1F85F, Disallowed, "", Unspecified),
    (0x1F860, 0x1F887, Valid, "", Nv8),
    (0x1F888, 0x1F88F, Disallowed, "", Unspecified),
    (0x1F890, 0x1F8AD, Valid, "", Nv8),
    (0x1F8AE, 0x1F8AF, Disallowed, "", Unspecified),
    (0x1F8B0, 0x1F8B1, Valid, "", Nv8),
    (0x1F8B2, 0x1F8FF, Disallowed, "", Unspecified),
    (0x1F900, 0x1F978, Valid, "", Nv8),
    (0x1F979, 0x1F979, Disallowed, "", Unspecified),
    (0x1F97A, 0x1F9CB, Valid, "", Nv8),
    (0x1F9CC, 0x1F9CC, Disallowed, "", Unspecified),
    (0x1F9CD, 0x1FA53, Valid, "", Nv8),
    (0x1FA54, 0x1FA5F, Disallowed, "", Unspecified),
    (0x1FA60, 0x1FA6D, Valid, "", Nv8),
    (0x1FA6E, 0x1FA6F, Disallowed, "", Unspecified),
    (0x1FA70, 0x1FA74, Valid, "", Nv8),
    (0x1FA75, 0x1FA77, Disallowed, "", Unspecified),
    (0x1FA78, 0x1FA7A, Valid, "", Nv8),
    (0x1FA7B, 0x1FA7F, Disallowed, "", Unspecified),
    (0x1FA80, 0x1FA86, Valid, "", Nv8),
    (0x1FA87, 0x1FA8F, Disallowed, "", Unspecified),
    (0x1FA90, 0x1FAA8, Valid, "", Nv8),
    (0x1FAA9, 0x1FAAF, Disallowed, "", Unspecified),
    (0x1FAB0, 0x1FAB6, Valid, "", Nv8),
    (0x1FAB7, 0x1FABF, Disallowed, "", Unspecified),
    (0x1FAC0, 0x1FAC2, Valid, "", Nv8),
    (0x1FAC3, 0x1FACF, Disallowed, "", Unspecified),
    (0x1FAD0, 0x1FAD6, Valid, "", Nv8),
    (0x1FAD7, 0x1FAFF, Disallowed, "", Unspecified),
    (0x1FB00, 0x1FB92, Valid, "", Nv8),
    (0x1FB93, 0x1FB93, Disallowed, "", Unspecified),
    (0x1FB94, 0x1FBCA, Valid, "", Nv8),
    (0x1FBCB, 0x1FBEF, Disallowed, "", Unspecified),
    (0x1FBF0, 0x1FBF0, Mapped, "0", Unspecified),
    (0x1FBF1, 0x1FBF1, Mapped, "1", Unspecified),
    (0x1FBF2, 0x1FBF2, Mapped, "2", Unspecified),
    (0x1FBF3, 0x1FBF3, Mapped, "3", Unspecified),
    (0x1FBF4, 0x1FBF4, Mapped, "4", Unspecified),
    (0x1FBF5, 0x1FBF5, Mapped, "5", Unspecified),
    (0x1FBF6, 0x1FBF6, Mapped, "6", Unspecified),
    (0x1FBF7, 0x1FBF7, Mapped, "7", Unspecified),
    (0x1FBF8, 0x1FBF8, Mapped, "8", Unspecified),
    (0x1FBF9, 0x1FBF9, Mapped, "9", Unspecified),
    (0x1FBFA, 0x1FFFF, Disallowed, "", Unspecified),
    (0x20000, 0x2A6DD, Valid, "", Unspecified),
    (0x2A6DE, 0x2A6FF, Disallowed, "", Unspecified),
    (0x2A700, 0x2B734, Valid, "", Unspecified),
    (0x2B735, 0x2B73F, Disallowed, "", Unspecified),
    (0x2B740, 0x2B81D, Valid, "", Unspecified),
    (0x2B81E, 0x2B81F, Disallowed, "", Unspecified),
    (0x2B820, 0x2CEA1, Valid, "", Unspecified),
    (0x2CEA2, 0x2CEAF, Disallowed, "", Unspecified),
    (0x2CEB0, 0x2EBE0, Valid, "", Unspecified),
    (0x2EBE1, 0x2F7FF, Disallowed, "", Unspecified),
    (0x2F800, 0x2F800, Mapped, "\u{4E3D}", Unspecified),
    (0x2F801, 0x2F801, Mapped, "\u{4E38}", Unspecified),
    (0x2F802, 0x2F802, Mapped, "\u{4E41}", Unspecified),
    (0x2F803, 0x2F803, Mapped, "\u{20122}", Unspecified),
    (0x2F804, 0x2F804, Mapped, "\u{4F60}", Unspecified),
    (0x2F805, 0x2F805, Mapped, "\u{4FAE}", Unspecified),
    (0x2F806, 0x2F806, Mapped, "\u{4FBB}", Unspecified),
    (0x2F807, 0x2F807, Mapped, "\u{5002}", Unspecified),
    (0x2F808, 0x2F808, Mapped, "\u{507A}", Unspecified),
    (0x2F809, 0x2F809, Mapped, "\u{5099}", Unspecified),
    (0x2F80A, 0x2F80A, Mapped, "\u{50E7}", Unspecified),
    (0x2F80B, 0x2F80B, Mapped, "\u{50CF}", Unspecified),
    (0x2F80C, 0x2F80C, Mapped, "\u{349E}", Unspecified),
    (0x2F80D, 0x2F80D, Mapped, "\u{2063A}", Unspecified),
    (0x2F80E, 0x2F80E, Mapped, "\u{514D}", Unspecified),
    (0x2F80F, 0x2F80F, Mapped, "\u{5154}", Unspecified),
    (0x2F810, 0x2F810, Mapped, "\u{5164}", Unspecified),
    (0x2F811, 0x2F811, Mapped, "\u{5177}", Unspecified),
    (0x2F812, 0x2F812, Mapped, "\u{2051C}", Unspecified),
    (0x2F813, 0x2F813, Mapped, "\u{34B9}", Unspecified),
    (0x2F814, 0x2F814, Mapped, "\u{5167}", Unspecified),
    (0x2F815, 0x2F815, Mapped, "\u{518D}", Unspecified),
    (0x2F816, 0x2F816, Mapped, "\u{2054B}", Unspecified),
    (0x2F817, 0x2F817, Mapped, "\u{5197}", Unspecified),
    (0x2F818, 0x2F818, Mapped, "\u{51A4}", Unspecified),
    (0x2F819, 0x2F819, Mapped, "\u{4ECC}", Unspecified),
    (0x2F81A, 0x2F81A, Mapped, "\u{51AC}", Unspecified),
    (0x2F81B, 0x2F81B, Mapped, "\u{51B5}", Unspecified),
    (0x2F81C, 0x2F81C, Mapped, "\u{291DF}", Unspecified),
    (0x2F81D, 0x2F81D, Mapped, "\u{51F5}", Unspecified),
    (0x2F81E, 0x2F81E, Mapped, "\u{5203}", Unspecified),
    (0x2F81F, 0x2F81F, Mapped, "\u{34DF}", Unspecified),
    (0x2F820, 0x2F820, Mapped, "\u{523B}", Unspecified),
    (0x2F821, 0x2F821, Mapped, "\u{5246}", Unspecified),
    (0x2F822, 0x2F822, Mapped, "\u{5272}", Unspecified),
    (0x2F823, 0x2F823, Mapped, "\u{5277}", Unspecified),
    (0x2F824, 0x2F824, Mapped, "\u{3515}", Unspecified),
    (0x2F825, 0x2F825, Mapped, "\u{52C7}", Unspecified),
    (0x2F826, 0x2F826, Mapped, "\u{52C9}", Unspecified),
    (0x2F827, 0x2F827, Mapped, "\u{52E4}", Unspecified),
    (0x2F828, 0x2F828, Mapped, "\u{52FA}", Unspecified),
    (0x2F829, 0x2F829, Mapped, "\u{5305}", Unspecified),
    (0x2F82A, 0x2F82A, Mapped, "\u{5306}", Unspecified),
    (0x2F82B, 0x2F82B, Mapped, "\u{5317}", Unspecified),
    (0x2F82C, 0x2F82C, Mapped, "\u{5349}", Unspecified),
    (0x2F82D, 0x2F82D, Mapped, "\u{5351}", Unspecified),
    (0x2F82E, 0x2F82E, Mapped, "\u{535A}", Unspecified),
    (0x2F82F, 0x2F82F, Mapped, "\u{5373}", Unspecified),
    (0x2F830, 0x2F830, Mapped, "\u{537D}", Unspecified),
    (0x2F831, 0x2F833, Mapped, "\u{537F}", Unspecified),
    (0x2F834, 0x2F834, Mapped, "\u{20A2C}", Unspecified),
    (0x2F835, 0x2F835, Mapped, "\u{7070}", Unspecified),
    (0x2F836, 0x2F836, Mapped, "\u{53CA}", Unspecified),
    (0x2F837, 0x2F837, Mapped, "\u{53DF}", Unspecified),
    (0x2F838, 0x2F838, Mapped, "\u{20B63}", Unspecified),
    (0x2F839, 0x2F839, Mapped, "\u{53EB}", Unspecified),
    (0x2F83A, 0x2F83A, Mapped, "\u{53F1}", Unspecified),
    (0x2F83B, 0x2F83B, Mapped, "\u{5406}", Unspecified),
    (0x2F83C, 0x2F83C, Mapped, "\u{549E}", Unspecified),
    (0x2F83D, 0x2F83D, Mapped, "\u{5438}", Unspecified),
    (0x2F83E, 0x2F83E, Mapped, "\u{5448}", Unspecified),
    (0x2F83F, 0x2F83F, Mapped, "\u{5468}", Unspecified),
    (0x2F840, 0x2F840, Mapped, "\u{54A2}", Unspecified),
    (0x2F841, 0x2F841, Mapped, "\u{54F6}", Unspecified),
    (0x2F842, 0x2F842, Mapped, "\u{5510}", Unspecified),
    (0x2F843, 0x2F843, Mapped, "\u{5553}", Unspecified),
    (0x2F844, 0x2F844, Mapped, "\u{5563}", Unspecified),
    (0x2F845, 0x2F846, Mapped, "\u{5584}", Unspecified),
    (0x2F847, 0x2F847, Mapped, "\u{5599}", Unspecified),
    (0x2F848, 0x2F848, Mapped, "\u{55AB}", Unspecified),
    (0x2F849, 0x2F849, Mapped, "\u{55B3}", Unspecified),
    (0x2F84A, 0x2F84A, Mapped, "\u{55C2}", Unspecified),
    (0x2F84B, 0x2F84B, Mapped, "\u{5716}", Unspecified),
    (0x2F84C, 0x2F84C, Mapped, "\u{5606}", Unspecified),
    (0x2F84D, 0x2F84D, Mapped, "\u{5717}", Unspecified),
    (0x2F84E, 0x2F84E, Mapped, "\u{5651}", Unspecified),
    (0x2F84F, 0x2F84F, Mapped, "\u{5674}", Unspecified),
    (0x2F850, 0x2F850, Mapped, "\u{5207}", Unspecified),
    (0x2F851, 0x2F851, Mapped, "\u{58EE}", Unspecified),
    (0x2F852, 0x2F852, Mapped, "\u{57CE}", Unspecified),
    (0x2F853, 0x2F853, Mapped, "\u{57F4}", Unspecified),
    (0x2F854, 0x2F854, Mapped, "\u{580D}", Unspecified),
    (0x2F855, 0x2F855, Mapped, "\u{578B}", Unspecified),
    (0x2F856, 0x2F856, Mapped, "\u{5832}", Unspecified),
    (0x2F857, 0x2F857, Mapped, "\u{5831}", Unspecified),
    (0x2F858, 0x2F858, Mapped, "\u{58AC}", Unspecified),
    (0x2F859, 0x2F859, Mapped, "\u{214E4}", Unspecified),
    (0x2F85A, 0x2F85A, Mapped, "\u{58F2}", Unspecified),
    (0x2F85B, 0x2F85B, Mapped, "\u{58F7}", Unspecified),
    (0x2F85C, 0x2F85C, Mapped, "\u{5906}", Unspecified),
    (0x2F85D, 0x2F85D, Mapped, "\u{591A}", Unspecified),
    (0x2F85E, 0x2F85E, Mapped, "\u{5922}", Unspecified),
    (0x2F85F, 0x2F85F, Mapped, "\u{5962}", Unspecified),
    (0x2F860, 0x2F860, Mapped, "\u{216A8}", Unspecified),
    (0x2F861, 0x2F861, Mapped, "\u{216EA}", Unspecified),
    (0x2F862, 0x2F862, Mapped, "\u{59EC}", Unspecified),
    (0x2F863, 0x2F863, Mapped, "\u{5A1B}", Unspecified),
    (0x2F864, 0x2F864, Mapped, "\u{5A27}", Unspecified),
    (0x2F865, 0x2F865, Mapped, "\u{59D8}", Unspecified),
    (0x2F866, 0x2F866, Mapped, "\u{5A66}", Unspecified),
    (0x2F867, 0x2F867, Mapped, "\u{36EE}", Unspecified),
    (0x2F868, 0x2F868, Disallowed, "", Unspecified),
    (0x2F869, 0x2F869, Mapped, "\u{5B08}", Unspecified),
    (0x2F86A, 0x2F86B, Mapped, "\u{5B3E}", Unspecified),
    (0x2F86C, 0x2F86C, Mapped, "\u{219C8}", Unspecified),
    (0x2F86D, 0x2F86D, Mapped, "\u{5BC3}", Unspecified),
    (0x2F86E, 0x2F86E, Mapped, "\u{5BD8}", Unspecified),
    (0x2F86F, 0x2F86F, Mapped, "\u{5BE7}", Unspecified),
    (0x2F870, 0x2F870, Mapped, "\u{5BF3}", Unspecified),
    (0x2F871, 0x2F871, Mapped, "\u{21B18}", Unspecified),
    (0x2F872, 0x2F872, Mapped, "\u{5BFF}", Unspecified),
    (0x2F873, 0x2F873, Mapped, "\u{5C06}", Unspecified),
    (0x2F874, 0x2F874, Disallowed, "", Unspecified),
    (0x2F875, 0x2F875, Mapped, "\u{5C22}", Unspecified),
    (0x2F876, 0x2F876, Mapped, "\u{3781}", Unspecified),
    (0x2F877, 0x2F877, Mapped, "\u{5C60}", Unspecified),
    (0x2F878, 0x2F878, Mapped, "\u{5C6E}", Unspecified),
    (0x2F879, 0x2F879, Mapped, "\u{5CC0}", Unspecified),
    (0x2F87A, 0x2F87A, Mapped, "\u{5C8D}", Unspecified),
    (0x2F87B, 0x2F87B, Mapped, "\u{21DE4}", Unspecified),
    (0x2F87C, 0x2F87C, Mapped, "\u{5D43}", Unspecified),
    (0x2F87D, 0x2F87D, Mapped, "\u{21DE6}", Unspecified),
    (0x2F87E, 0x2F87E, Mapped, "\u{5D6E}", Unspecified),
    (0x2F87F, 0x2F87F, Mapped, "\u{5D6B}", Unspecified),
    (0x2F880, 0x2F880, Mapped, "\u{5D7C}", Unspecified),
    (0x2F881, 0x2F881, Mapped, "\u{5DE1}", Unspecified),
    (0x2F882, 0x2F882, Mapped, "\u{5DE2}", Unspecified),
    (0x2F883, 0x2F883, Mapped, "\u{382F}", Unspecified),
    (0x2F884, 0x2F884, Mapped, "\u{5DFD}", Unspecified),
    (0x2F885, 0x2F885, Mapped, "\u{5E28}", Unspecified),
    (0x2F886, 0x2F886, Mapped, "\u{5E3D}", Unspecified),
    (0x2F887, 0x2F887, Mapped, "\u{5E69}", Unspecified),
    (0x2F888, 0x2F888, Mapped, "\u{3862}", Unspecified),
    (0x2F889, 0x2F889, Mapped, "\u{22183}", Unspecified),
    (0x2F88A, 0x2F88A, Mapped, "\u{387C}", Unspecified),
    (0x2F88B, 0x2F88B, Mapped, "\u{5EB0}", Unspecified),
    (0x2F88C, 0x2F88C, Mapped, "\u{5EB3}", Unspecified),
    (0x2F88D, 0x2F88D, Mapped, "\u{5EB6}", Unspecified),
    (0x2F88E, 0x2F88E, Mapped, "\u{5ECA}", Unspecified),
    (0x2F88F, 0x2F88F, Mapped, "\u{2A392}", Unspecified),
    (0x2F890, 0x2F890, Mapped, "\u{5EFE}", Unspecified),
    (0x2F891, 0x2F892, Mapped, "\u{22331}", Unspecified),
    (0x2F893, 0x2F893, Mapped, "\u{8201}", Unspecified),
    (0x2F894, 0x2F895, Mapped, "\u{5F22}", Unspecified),
    (0x2F896, 0x2F896, Mapped, "\u{38C7}", Unspecified),
    (0x2F897, 0x2F897, Mapped, "\u{232B8}", Unspecified),
    (0x2F898, 0x2F898, Mapped, "\u{261DA}", Unspecified),
    (0x2F899, 0x2F899, Mapped, "\u{5F62}", Unspecified),
    (0x2F89A, 0x2F89A, Mapped, "\u{5F6B}", Unspecified),
    (0x2F89B, 0x2F89B, Mapped, "\u{38E3}", Unspecified),
    (0x2F89C, 0x2F89C, Mapped, "\u{5F9A}", Unspecified),
    (0x2F89D, 0x2F89D, Mapped, "\u{5FCD}", Unspecified),
    (0x2F89E, 0x2F89E, Mapped, "\u{5FD7}", Unspecified),
    (0x2F89F, 0x2F89F, Mapped, "\u{5FF9}", Unspecified),
    (0x2F8A0, 0x2F8A0, Mapped, "\u{6081}", Unspecified),
    (0x2F8A1, 0x2F8A1, Mapped, "\u{393A}", Unspecified),
    (0x2F8A2, 0x2F8A2, Mapped, "\u{391C}", Unspecified),
    (0x2F8A3, 0x2F8A3, Mapped, "\u{6094}", Unspecified),
    (0x2F8A4, 0x2F8A4, Mapped, "\u{226D4}", Unspecified),
    (0x2F8A5, 0x2F8A5, Mapped, "\u{60C7}", Unspecified),
    (0x2F8A6, 0x2F8A6, Mapped, "\u{6148}", Unspecified),
    (0x2F8A7, 0x2F8A7, Mapped, "\u{614C}", Unspecified),
    (0x2F8A8, 0x2F8A8, Mapped, "\u{614E}", Unspecified),
    (0x2F8A9, 0x2F8A9, Mapped, "\u{614C}", Unspecified),
    (0x2F8AA, 0x2F8AA, Mapped, "\u{617A}", Unspecified),
    (0x2F8AB, 0x2F8AB, Mapped, "\u{618E}", Unspecified),
    (0x2F8AC, 0x2F8AC, Mapped, "\u{61B2}", Unspecified),
    (0x2F8AD, 0x2F8AD, Mapped, "\u{61A4}", Unspecified),
    (0x2F8AE, 0x2F8AE, Mapped, "\u{61AF}", Unspecified),
    (0x2F8AF, 0x2F8AF, Mapped, "\u{61DE}", Unspecified),
    (0x2F8B0, 0x2F8B0, Mapped, "\u{61F2}", Unspecified),
    (0x2F8B1, 0x2F8B1, Mapped, "\u{61F6}", Unspecified),
    (0x2F8B2, 0x2F8B2, Mapped, "\u{6210}", Unspecified),
    (0x2F8B3, 0x2F8B3, Mapped, "\u{621B}", Unspecified),
    (0x2F8B4, 0x2F8B4, Mapped, "\u{625D}", Unspecified),
    (0x2F8B5, 0x2F8B5, Mapped, "\u{62B1}", Unspecified),
    (0x2F8B6, 0x2F8B6, Mapped, "\u{62D4}", Unspecified),
    (0x2F8B7, 0x2F8B7, Mapped, "\u{6350}", Unspecified),
    (0x2F8B8, 0x2F8B8, Mapped, "\u{22B0C}", Unspecified),
    (0x2F8B9, 0x2F8B9, Mapped, "\u{633D}", Unspecified),
    (0x2F8BA, 0x2F8BA, Mapped, "\u{62FC}", Unspecified),
    (0x2F8BB, 0x2F8BB, Mapped, "\u{6368}", Unspecified),
    (0x2F8BC, 0x2F8BC, Mapped, "\u{6383}", Unspecified),
    (0x2F8BD, 0x2F8BD, Mapped, "\u{63E4}", Unspecified),
    (0x2F8BE, 0x2F8BE, Mapped, "\u{22BF1}", Unspecified),
    (0x2F8BF, 0x2F8BF, Mapped, "\u{6422}", Unspecified),
    (0x2F8C0, 0x2F8C0, Mapped, "\u{63C5}", Unspecified),
    (0x2F8C1, 0x2F8C1, Mapped, "\u{63A9}", Unspecified),
    (0x2F8C2, 0x2F8C2, Mapped, "\u{3A2E}", Unspecified),
    (0x2F8C3, 0x2F8C3, Mapped, "\u{6469}", Unspecified),
    (0x2F8C4, 0x2F8C4, Mapped, "\u{647E}", Unspecified),
    (0x2F8C5, 0x2F8C5, Mapped, "\u{649D}", Unspecified),
    (0x2F8C6, 0x2F8C6, Mapped, "\u{6477}", Unspecified),
    (0x2F8C7, 0x2F8C7, Mapped, "\u{3A6C}", Unspecified),
    (0x2F8C8, 0x2F8C8, Mapped, "\u{654F}", Unspecified),
    (0x2F8C9, 0x2F8C9, Mapped, "\u{656C}", Unspecified),
    (0x2F8CA, 0x2F8CA, Mapped, "\u{2300A}", Unspecified),
    (0x2F8CB, 0x2F8CB, Mapped, "\u{65E3}", Unspecified),
    (0x2F8CC, 0x2F8CC, Mapped, "\u{66F8}", Unspecified),
    (0x2F8CD, 0x2F8CD, Mapped, "\u{6649}", Unspecified),
    (0x2F8CE, 0x2F8CE, Mapped, "\u{3B19}", Unspecified),
    (0x2F8CF, 0x2F8CF, Mapped, "\u{6691}", Unspecified),
    (0x2F8D0, 0x2F8D0, Mapped, "\u{3B08}", Unspecified),
    (0x2F8D1, 0x2F8D1, Mapped, "\u{3AE4}", Unspecified),
    (0x2F8D2, 0x2F8D2, Mapped, "\u{5192}", Unspecified),
    (0x2F8D3, 0x2F8D3, Mapped, "\u{5195}", Unspecified),
    (0x2F8D4, 0x2F8D4, Mapped, "\u{6700}", Unspecified),
    (0x2F8D5, 0x2F8D5, Mapped, "\u{669C}", Unspecified),
    (0x2F8D6, 0x2F8D6, Mapped, "\u{80AD}", Unspecified),
    (0x2F8D7, 0x2F8D7, Mapped, "\u{43D9}", Unspecified),
    (0x2F8D8, 0x2F8D8, Mapped, "\u{6717}", Unspecified),
    (0x2F8D9, 0x2F8D9, Mapped, "\u{671B}", Unspecified),
    (0x2F8DA, 0x2F8DA, Mapped, "\u{6721}", Unspecified),
    (0x2F8DB, 0x2F8DB, Mapped, "\u{675E}", Unspecified),
    (0x2F8DC, 0x2F8DC, Mapped, "\u{6753}", Unspecified),
    (0x2F8DD, 0x2F8DD, Mapped, "\u{233C3}", Unspecified),
    (0x2F8DE, 0x2F8DE, Mapped, "\u{3B49}", Unspecified),
    (0x2F8DF, 0x2F8DF, Mapped, "\u{67FA}", Unspecified),
    (0x2F8E0, 0x2F8E0, Mapped, "\u{6785}", Unspecified),
    (0x2F8E1, 0x2F8E1, Mapped, "\u{6852}", Unspecified),
    (0x2F8E2, 0x2F8E2, Mapped, "\u{6885}", Unspecified),
    (0x2F8E3, 0x2F8E3, Mapped, "\u{2346D}", Unspecified),
    (0x2F8E4, 0x2F8E4, Mapped, "\u{688E}", Unspecified),
    (0x2F8E5, 0x2F8E5, Mapped, "\u{681F}", Unspecified),
    (0x2F8E6, 0x2F8E6, Mapped, "\u{6914}", Unspecified),
    (0x2F8E7, 0x2F8E7, Mapped, "\u{3B9D}", Unspecified),
    (0x2F8E8, 0x2F8E8, Mapped, "\u{6942}", Unspecified),
    (0x2F8E9, 0x2F8E9, Mapped, "\u{69A3}", Unspecified),
    (0x2F8EA, 0x2F8EA, Mapped, "\u{69EA}", Unspecified),
    (0x2F8EB, 0x2F8EB, Mapped, "\u{6AA8}", Unspecified),
    (0x2F8EC, 0x2F8EC, Mapped, "\u{236A3}", Unspecified),
    (0x2F8ED, 0x2F8ED, Mapped, "\u{6ADB}", Unspecified),
    (0x2F8EE, 0x2F8EE, Mapped, "\u{3C18}", Unspecified),
    (0x2F8EF, 0x2F8EF, Mapped, "\u{6B21}", Unspecified),
    (0x2F8F0, 0x2F8F0, Mapped, "\u{238A7}", Unspecified),
    (0x2F8F1, 0x2F8F1, Mapped, "\u{6B54}", Unspecified),
    (0x2F8F2, 0x2F8F2, Mapped, "\u{3C4E}", Unspecified),
    (0x2F8F3, 0x2F8F3, Mapped, "\u{6B72}", Unspecified),
    (0x2F8F4, 0x2F8F4, Mapped, "\u{6B9F}", Unspecified),
    (0x2F8F5, 0x2F8F5, Mapped, "\u{6BBA}", Unspecified),
    (0x2F8F6, 0x2F8F6, Mapped, "\u{6BBB}", Unspecified),
    (0x2F8F7, 0x2F8F7, Mapped, "\u{23A8D}", Unspecified),
    (0x2F8F8, 0x2F8F8, Mapped, "\u{21D0B}", Unspecified),
    (0x2F8F9, 0x2F8F9, Mapped, "\u{23AFA}", Unspecified),
    (0x2F8FA, 0x2F8FA, Mapped, "\u{6C4E}", Unspecified),
    (0x2F8FB, 0x2F8FB, Mapped, "\u{23CBC}", Unspecified),
    (0x2F8FC, 0x2F8FC, Mapped, "\u{6CBF}", Unspecified),
    (0x2F8FD, 0x2F8FD, Mapped, "\u{6CCD}", Unspecified),
    (0x2F8FE, 0x2F8FE, Mapped, "\u{6C67}", Unspecified),
    (0x2F8FF, 0x2F8FF, Mapped, "\u{6D16}", Unspecified),
    (0x2F900, 0x2F900, Mapped, "\u{6D3E}", Unspecified),
    (0x2F901, 0x2F901, Mapped, "\u{6D77}", Unspecified),
    (0x2F902, 0x2F902, Mapped, "\u{6D41}", Unspecified),
    (0x2F903, 0x2F903, Mapped, "\u{6D69}", Unspecified),
    (0x2F904, 0x2F904, Mapped, "\u{6D78}", Unspecified),
    (0x2F905, 0x2F905, Mapped, "\u{6D85}", Unspecified),
    (0x2F906, 0x2F906, Mapped, "\u{23D1E}", Unspecified),
    (0x2F907, 0x2F907, Mapped, "\u{6D34}", Unspecified),
    (0x2F908, 0x2F908, Mapped, "\u{6E2F}", Unspecified),
    (0x2F909, 0x2F909, Mapped, "\u{6E6E}", Unspecified),
    (0x2F90A, 0x2F90A, Mapped, "\u{3D33}", Unspecified),
    (0x2F90B, 0x2F90B, Mapped, "\u{6ECB}", Unspecified),
    (0x2F90C, 0x2F90C, Mapped, "\u{6EC7}", Unspecified),
    (0x2F90D, 0x2F90D, Mapped, "\u{23ED1}", Unspecified),
    (0x2F90E, 0x2F90E, Mapped, "\u{6DF9}", Unspecified),
    (0x2F90F, 0x2F90F, Mapped, "\u{6F6E}", Unspecified),
    (0x2F910, 0x2F910, Mapped, "\u{23F5E}", Unspecified),
    (0x2F911, 0x2F911, Mapped, "\u{23F8E}", Unspecified),
    (0x2F912, 0x2F912, Mapped, "\u{6FC6}", Unspecified),
    (0x2F913, 0x2F913, Mapped, "\u{7039}", Unspecified),
    (0x2F914, 0x2F914, Mapped, "\u{701E}", Unspecified),
    (0x2F915, 0x2F915, Mapped, "\u{701B}", Unspecified),
    (0x2F916, 0x2F916, Mapped, "\u{3D96}", Unspecified),
    (0x2F917, 0x2F917, Mapped, "\u{704A}", Unspecified),
    (0x2F918, 0x2F918, Mapped, "\u{707D}", Unspecified),
    (0x2F919, 0x2F919, Mapped, "\u{7077}", Unspecified),
    (0x2F91A, 0x2F91A, Mapped, "\u{70AD}", Unspecified),
    (0x2F91B, 0x2F91B, Mapped, "\u{20525}", Unspecified),
    (0x2F91C, 0x2F91C, Mapped, "\u{7145}", Unspecified),
    (0x2F91D, 0x2F91D, Mapped, "\u{24263}", Unspecified),
    (0x2F91E, 0x2F91E, Mapped, "\u{719C}", Unspecified),
    (0x2F91F, 0x2F91F, Disallowed, "", Unspecified),
    (0x2F920, 0x2F920, Mapped, "\u{7228}", Unspecified),
    (0x2F921, 0x2F921, Mapped, "\u{7235}", Unspecified),
    (0x2F922, 0x2F922, Mapped, "\u{7250}", Unspecified),
    (0x2F923, 0x2F923, Mapped, "\u{24608}", Unspecified),
    (0x2F924, 0x2F924, Mapped, "\u{7280}", Unspecified),
    (0x2F925, 0x2F925, Mapped, "\u{7295}", Unspecified),
    (0x2F926, 0x2F926, Mapped, "\u{24735}", Unspecified),
    (0x2F927, 0x2F927, Mapped, "\u{24814}", Unspecified),
    (0x2F928, 0x2F928, Mapped, "\u{737A}", Unspecified),
    (0x2F929, 0x2F929, Mapped, "\u{738B}", Unspecified),
    (0x2F92A, 0x2F92A, Mapped, "\u{3EAC}", Unspecified),
    (0x2F92B, 0x2F92B, Mapped, "\u{73A5}", Unspecified),
    (0x2F92C, 0x2F92D, Mapped, "\u{3EB8}", Unspecified),
    (0x2F92E, 0x2F92E, Mapped, "\u{7447}", Unspecified),
    (0x2F92F, 0x2F92F, Mapped, "\u{745C}", Unspecified),
    (0x2F930, 0x2F930, Mapped, "\u{7471}", Unspecified),
    (0x2F931, 0x2F931, Mapped, "\u{7485}", Unspecified),
    (0x2F932, 0x2F932, Mapped, "\u{74CA}", Unspecified),
    (0x2F933, 0x2F933, Mapped, "\u{3F1B}", Unspecified),
    (0x2F934, 0x2F934, Mapped, "\u{7524}", Unspecified),
    (0x2F935, 0x2F935, Mapped, "\u{24C36}", Unspecified),
    (0x2F936, 0x2F936, Mapped, "\u{753E}", Unspecified),
    (0x2F937, 0x2F937, Mapped, "\u{24C92}", Unspecified),
    (0x2F938, 0x2F938, Mapped, "\u{7570}", Unspecified),
    (0x2F939, 0x2F939, Mapped, "\u{2219F}", Unspecified),
    (0x2F93A, 0x2F93A, Mapped, "\u{7610}", Unspecified),
    (0x2F93B, 0x2F93B, Mapped, "\u{24FA1}", Unspecified),
    (0x2F93C, 0x2F93C, Mapped, "\u{24FB8}", Unspecified),
    (0x2F93D, 0x2F93D, Mapped, "\u{25044}", Unspecified),
    (0x2F93E, 0x2F93E, Mapped, "\u{3FFC}", Unspecified),
    (0x2F93F, 0x2F93F, Mapped, "\u{4008}", Unspecified),
    (0x2F940, 0x2F940, Mapped, "\u{76F4}", Unspecified),
    (0x2F941, 0x2F941, Mapped, "\u{250F3}", Unspecified),
    (0x2F942, 0x2F942, Mapped, "\u{250F2}", Unspecified),
    (0x2F943, 0x2F943, Mapped, "\u{25119}", Unspecified),
    (0x2F944, 0x2F944, Mapped, "\u{25133}", Unspecified),
    (0x2F945, 0x2F945, Mapped, "\u{771E}", Unspecified),
    (0x2F946, 0x2F947, Mapped, "\u{771F}", Unspecified),
    (0x2F948, 0x2F948, Mapped, "\u{774A}", Unspecified),
    (0x2F949, 0x2F949, Mapped, "\u{4039}", Unspecified),
    (0x2F94A, 0x2F94A, Mapped, "\u{778B}", Unspecified),
    (0x2F94B, 0x2F94B, Mapped, "\u{4046}", Unspecified),
    (0x2F94C, 0x2F94C, Mapped, "\u{4096}", Unspecified),
    (0x2F94D, 0x2F94D, Mapped, "\u{2541D}", Unspecified),
    (0x2F94E, 0x2F94E, Mapped, "\u{784E}", Unspecified),
    (0x2F94F, 0x2F94F, Mapped, "\u{788C}", Unspecified),
    (0x2F950, 0x2F950, Mapped, "\u{78CC}", Unspecified),
    (0x2F951, 0x2F951, Mapped, "\u{40E3}", Unspecified),
    (0x2F952, 0x2F952, Mapped, "\u{25626}", Unspecified),
    (0x2F953, 0x2F953, Mapped, "\u{7956}", Unspecified),
    (0x2F954, 0x2F954, Mapped, "\u{2569A}", Unspecified),
    (0x2F955, 0x2F955, Mapped, "\u{256C5}", Unspecified),
    (0x2F956, 0x2F956, Mapped, "\u{798F}", Unspecified),
    (0x2F957, 0x2F957, Mapped, "\u{79EB}", Unspecified),
    (0x2F958, 0x2F958, Mapped, "\u{412F}", Unspecified),
    (0x2F959, 0x2F959, Mapped, "\u{7A40}", Unspecified),
    (0x2F95A, 0x2F95A, Mapped, "\u{7A4A}", Unspecified),
    (0x2F95B, 0x2F95B, Mapped, "\u{7A4F}", Unspecified),
    (0x2F95C, 0x2F95C, Mapped, "\u{2597C}", Unspecified),
    (0x2F95D, 0x2F95E, Mapped, "\u{25AA7}", Unspecified),
    (0x2F95F, 0x2F95F, Disallowed, "", Unspecified),
    (0x2F960, 0x2F960, Mapped, "\u{4202}", Unspecified),
    (0x2F961, 0x2F961, Mapped, "\u{25BAB}", Unspecified),
    (0x2F962, 0x2F962, Mapped, "\u{7BC6}", Unspecified),
    (0x2F963, 0x2F963, Mapped, "\u{7BC9}", Unspecified),
    (0x2F964, 0x2F964, Mapped, "\u{4227}", Unspecified),
    (0x2F965, 0x2F965, Mapped, "\u{25C80}", Unspecified),
    (0x2F966, 0x2F966, Mapped, "\u{7CD2}", Unspecified),
    (0x2F967, 0x2F967, Mapped, "\u{42A0}", Unspecified),
    (0x2F968, 0x2F968, Mapped, "\u{7CE8}", Unspecified),
    (0x2F969, 0x2F969, Mapped, "\u{7CE3}", Unspecified),
    (0x2F96A, 0x2F96A, Mapped, "\u{7D00}", Unspecified),
    (0x2F96B, 0x2F96B, Mapped, "\u{25F86}", Unspecified),
    (0x2F96C, 0x2F96C, Mapped, "\u{7D63}", Unspecified),
    (0x2F96D, 0x2F96D, Mapped, "\u{4301}", Unspecified),
    (0x2F96E, 0x2F96E, Mapped, "\u{7DC7}", Unspecified),
    (0x2F96F, 0x2F96F, Mapped, "\u{7E02}", Unspecified),
    (0x2F970, 0x2F970, Mapped, "\u{7E45}", Unspecified),
    (0x2F971, 0x2F971, Mapped, "\u{4334}", Unspecified),
    (0x2F972, 0x2F972, Mapped, "\u{26228}", Unspecified),
    (0x2F973, 0x2F973, Mapped, "\u{26247}", Unspecified),
    (0x2F974, 0x2F974, Mapped, "\u{4359}", Unspecified),
    (0x2F975, 0x2F975, Mapped, "\u{262D9}", Unspecified),
    (0x2F976, 0x2F976, Mapped, "\u{7F7A}", Unspecified),
    (0x2F977, 0x2F977, Mapped, "\u{2633E}", Unspecified),
    (0x2F978, 0x2F978, Mapped, "\u{7F95}", Unspecified),
    (0x2F979, 0x2F979, Mapped, "\u{7FFA}", Unspecified),
    (0x2F97A, 0x2F97A, Mapped, "\u{8005}", Unspecified),
    (0x2F97B, 0x2F97B, Mapped, "\u{264DA}", Unspecified),
    (0x2F97C, 0x2F97C, Mapped, "\u{26523}", Unspecified),
    (0x2F97D, 0x2F97D, Mapped, "\u{8060}", Unspecified),
    (0x2F97E, 0x2F97E, Mapped, "\u{265A8}", Unspecified),
    (0x2F97F, 0x2F97F, Mapped, "\u{8070}", Unspecified),
    (0x2F980, 0x2F980, Mapped, "\u{2335F}", Unspecified),
    (0x2F981, 0x2F981, Mapped, "\u{43D5}", Unspecified),
    (0x2F982, 0x2F982, Mapped, "\u{80B2}", Unspecified),
    (0x2F983, 0x2F983, Mapped, "\u{8103}", Unspecified),
    (0x2F984, 0x2F984, Mapped, "\u{440B}", Unspecified),
    (0x2F985, 0x2F985, Mapped, "\u{813E}", Unspecified),
    (0x2F986, 0x2F986, Mapped, "\u{5AB5}", Unspecified),
    (0x2F987, 0x2F987, Mapped, "\u{267A7}", Unspecified),
    (0x2F988, 0x2F988, Mapped, "\u{267B5}", Unspecified),
    (0x2F989, 0x2F989, Mapped, "\u{23393}", Unspecified),
    (0x2F98A, 0x2F98A, Mapped, "\u{2339C}", Unspecified),
    (0x2F98B, 0x2F98B, Mapped, "\u{8201}", Unspecified),
    (0x2F98C, 0x2F98C, Mapped, "\u{8204}", Unspecified),
    (0x2F98D, 0x2F98D, Mapped, "\u{8F9E}", Unspecified),
    (0x2F98E, 0x2F98E, Mapped, "\u{446B}", Unspecified),
    (0x2F98F, 0x2F98F, Mapped, "\u{8291}", Unspecified),
    (0x2F990, 0x2F990, Mapped, "\u{828B}", Unspecified),
    (0x2F991, 0x2F991, Mapped, "\u{829D}", Unspecified),
    (0x2F992, 0x2F992, Mapped, "\u{52B3}", Unspecified),
    (0x2F993, 0x2F993, Mapped, "\u{82B1}", Unspecified),
    (0x2F994, 0x2F994, Mapped, "\u{82B3}", Unspecified),
    (0x2F995, 0x2F995, Mapped, "\u{82BD}", Unspecified),
    (0x2F996, 0x2F996, Mapped, "\u{82E6}", Unspecified),
    (0x2F997, 0x2F997, Mapped, "\u{26B3C}", Unspecified),
    (0x2F998, 0x2F998, Mapped, "\u{82E5}", Unspecified),
    (0x2F999, 0x2F999, Mapped, "\u{831D}", Unspecified),
    (0x2F99A, 0x2F99A, Mapped, "\u{8363}", Unspecified),
    (0x2F99B, 0x2F99B, Mapped, "\u{83AD}", Unspecified),
    (0x2F99C, 0x2F99C, Mapped, "\u{8323}", Unspecified),
    (0x2F99D, 0x2F99D, Mapped, "\u{83BD}", Unspecified),
    (0x2F99E, 0x2F99E, Mapped, "\u{83E7}", Unspecified),
    (0x2F99F, 0x2F99F, Mapped, "\u{8457}", Unspecified),
    (0x2F9A0, 0x2F9A0, Mapped, "\u{8353}", Unspecified),
    (0x2F9A1, 0x2F9A1, Mapped, "\u{83CA}", Unspecified),
    (0x2F9A2, 0x2F9A2, Mapped, "\u{83CC}", Unspecified),
    (0x2F9A3, 0x2F9A3, Mapped, "\u{83DC}", Unspecified),
    (0x2F9A4, 0x2F9A4, Mapped, "\u{26C36}", Unspecified),
    (0x2F9A5, 0x2F9A5, Mapped, "\u{26D6B}", Unspecified),
    (0x2F9A6, 0x2F9A6, Mapped, "\u{26CD5}", Unspecified),
    (0x2F9A7, 0x2F9A7, Mapped, "\u{452B}", Unspecified),
    (0x2F9A8, 0x2F9A8, Mapped, "\u{84F1}", Unspecified),
    (0x2F9A9, 0x2F9A9, Mapped, "\u{84F3}", Unspecified),
    (0x2F9AA, 0x2F9AA, Mapped, "\u{8516}", Unspecified),
    (0x2F9AB, 0x2F9AB, Mapped, "\u{273CA}", Unspecified),
    (0x2F9AC, 0x2F9AC, Mapped, "\u{8564}", Unspecified),
    (0x2F9AD, 0x2F9AD, Mapped, "\u{26F2C}", Unspecified),
    (0x2F9AE, 0x2F9AE, Mapped, "\u{455D}", Unspecified),
    (0x2F9AF, 0x2F9AF, Mapped, "\u{4561}", Unspecified),
    (0x2F9B0, 0x2F9B0, Mapped, "\u{26FB1}", Unspecified),
    (0x2F9B1, 0x2F9B1, Mapped, "\u{270D2}", Unspecified),
    (0x2F9B2, 0x2F9B2, Mapped, "\u{456B}", Unspecified),
    (0x2F9B3, 0x2F9B3, Mapped, "\u{8650}", Unspecified),
    (0x2F9B4, 0x2F9B4, Mapped, "\u{865C}", Unspecified),
    (0x2F9B5, 0x2F9B5, Mapped, "\u{8667}", Unspecified),
    (0x2F9B6, 0x2F9B6, Mapped, "\u{8669}", Unspecified),
    (0x2F9B7, 0x2F9B7, Mapped, "\u{86A9}", Unspecified),
    (0x2F9B8, 0x2F9B8, Mapped, "\u{8688}", Unspecified),
    (0x2F9B9, 0x2F9B9, Mapped, "\u{870E}", Unspecified),
    (0x2F9BA, 0x2F9BA, Mapped, "\u{86E2}", Unspecified),
    (0x2F9BB, 0x2F9BB, Mapped, "\u{8779}", Unspecified),
    (0x2F9BC, 0x2F9BC, Mapped, "\u{8728}", Unspecified),
    (0x2F9BD, 0x2F9BD, Mapped, "\u{876B}", Unspecified),
    (0x2F9BE, 0x2F9BE, Mapped, "\u{8786}", Unspecified),
    (0x2F9BF, 0x2F9BF, Disallowed, "", Unspecified),
    (0x2F9C0, 0x2F9C0, Mapped, "\u{87E1}", Unspecified),
    (0x2F9C1, 0x2F9C1, Mapped, "\u{8801}", Unspecified),
    (0x2F9C2, 0x2F9C2, Mapped, "\u{45F9}", Unspecified),
    (0x2F9C3, 0x2F9C3, Mapped, "\u{8860}", Unspecified),
    (0x2F9C4, 0x2F9C4, Mapped, "\u{8863}", Unspecified),
    (0x2F9C5, 0x2F9C5, Mapped, "\u{27667}", Unspecified),
    (0x2F9C6, 0x2F9C6, Mapped, "\u{88D7}", Unspecified),
    (0x2F9C7, 0x2F9C7, Mapped, "\u{88DE}", Unspecified),
    (0x2F9C8, 0x2F9C8, Mapped, "\u{4635}", Unspecified),
    (0x2F9C9, 0x2F9C9, Mapped, "\u{88FA}", Unspecified),
    (0x2F9CA, 0x2F9CA, Mapped, "\u{34BB}", Unspecified),
    (0x2F9CB, 0x2F9CB, Mapped, "\u{278AE}", Unspecified),
    (0x2F9CC, 0x2F9CC, Mapped, "\u{27966}", Unspecified),
    (0x2F9CD, 0x2F9CD, Mapped, "\u{46BE}", Unspecified),
    (0x2F9CE, 0x2F9CE, Mapped, "\u{46C7}", Unspecified),
    (0x2F9CF, 0x2F9CF, Mapped, "\u{8AA0}", Unspecified),
    (0x2F9D0, 0x2F9D0, Mapped, "\u{8AED}", Unspecified),
    (0x2F9D1, 0x2F9D1, Mapped, "\u{8B8A}", Unspecified),
    (0x2F9D2, 0x2F9D2, Mapped, "\u{8C55}", Unspecified),
    (0x2F9D3, 0x2F9D3, Mapped, "\u{27CA8}", Unspecified),
    (0x2F9D4, 0x2F9D4, Mapped, "\u{8CAB}", Unspecified),
    (0x2F9D5, 0x2F9D5, Mapped, "\u{8CC1}", Unspecified),
    (0x2F9D6, 0x2F9D6, Mapped, "\u{8D1B}", Unspecified),
    (0x2F9D7, 0x2F9D7, Mapped, "\u{8D77}", Unspecified),
    (0x2F9D8, 0x2F9D8, Mapped, "\u{27F2F}", Unspecified),
    (0x2F9D9, 0x2F9D9, Mapped, "\u{20804}", Unspecified),
    (0x2F9DA, 0x2F9DA, Mapped, "\u{8DCB}", Unspecified),
    (0x2F9DB, 0x2F9DB, Mapped, "\u{8DBC}", Unspecified),
    (0x2F9DC, 0x2F9DC, Mapped, "\u{8DF0}", Unspecified),
    (0x2F9DD, 0x2F9DD, Mapped, "\u{208DE}", Unspecified),
    (0x2F9DE, 0x2F9DE, Mapped, "\u{8ED4}", Unspecified),
    (0x2F9DF, 0x2F9DF, Mapped, "\u{8F38}", Unspecified),
    (0x2F9E0, 0x2F9E0, Mapped, "\u{285D2}", Unspecified),
    (0x2F9E1, 0x2F9E1, Mapped, "\u{285ED}", Unspecified),
    (0x2F9E2, 0x2F9E2, Mapped, "\u{9094}", Unspecified),
    (0x2F9E3, 0x2F9E3, Mapped, "\u{90F1}", Unspecified),
    (0x2F9E4, 0x2F9E4, Mapped, "\u{9111}", Unspecified),
    (0x2F9E5, 0x2F9E5, Mapped, "\u{2872E}", Unspecified),
    (0x2F9E6, 0x2F9E6, Mapped, "\u{911B}", Unspecified),
    (0x2F9E7, 0x2F9E7, Mapped, "\u{9238}", Unspecified),
    (0x2F9E8, 0x2F9E8, Mapped, "\u{92D7}", Unspecified),
    (0x2F9E9, 0x2F9E9, Mapped, "\u{92D8}", Unspecified),
    (0x2F9EA, 0x2F9EA, Mapped, "\u{927C}", Unspecified),
    (0x2F9EB, 0x2F9EB, Mapped, "\u{93F9}", Unspecified),
    (0x2F9EC, 0x2F9EC, Mapped, "\u{9415}", Unspecified),
    (0x2F9ED, 0x2F9ED, Mapped, "\u{28BFA}", Unspecified),
    (0x2F9EE, 0x2F9EE, Mapped, "\u{958B}", Unspecified),
    (0x2F9EF, 0x2F9EF, Mapped, "\u{4995}", Unspecified),
    (0x2F9F0, 0x2F9F0, Mapped, "\u{95B7}", Unspecified),
    (0x2F9F1, 0x2F9F1, Mapped, "\u{28D77}", Unspecified),
    (0x2F9F2, 0x2F9F2, Mapped, "\u{49E6}", Unspecified),
    (0x2F9F3, 0x2F9F3, Mapped, "\u{96C3}", Unspecified),
    (0x2F9F4, 0x2F9F4, Mapped, "\u{5DB2}", Unspecified),
    (0x2F9F5, 0x2F9F5, Mapped, "\u{9723}", Unspecified),
    (0x2F9F6, 0x2F9F6, Mapped, "\u{29145}", Unspecified),
    (0x2F9F7, 0x2F9F7, Mapped, "\u{2921A}", Unspecified),
    (0x2F9F8, 0x2F9F8, Mapped, "\u{4A6E}", Unspecified),
    (0x2F9F9, 0x2F9F9, Mapped, "\u{4A76}", Unspecified),
    (0x2F9FA, 0x2F9FA, Mapped, "\u{97E0}", Unspecified),
    (0x2F9FB, 0x2F9FB, Mapped, "\u{2940A}", Unspecified),
    (0x2F9FC, 0x2F9FC, Mapped, "\u{4AB2}", Unspecified),
    (0x2F9FD, 0x2F9FD, Mapped, "\u{29496}", Unspecified),
    (0x2F9FE, 0x2F9FF, Mapped, "\u{980B}", Unspecified),
    (0x2FA00, 0x2FA00, Mapped, "\u{9829}", Unspecified),
    (0x2FA01, 0x2FA01, Mapped, "\u{295B6}", Unspecified),
    (0x2FA02, 0x2FA02, Mapped, "\u{98E2}", Unspecified),
    (0x2FA03, 0x2FA03, Mapped, "\u{4B33}", Unspecified),
    (0x2FA04, 0x2FA04, Mapped, "\u{9929}", Unspecified),
    (0x2FA05, 0x2FA05, Mapped, "\u{99A7}", Unspecified),
    (0x2FA06, 0x2FA06, Mapped, "\u{99C2}", Unspecified),
    (0x2FA07, 0x2FA07, Mapped, "\u{99FE}", Unspecified),
    (0x2FA08, 0x2FA08, Mapped, "\u{4BCE}", Unspecified),
    (0x2FA09, 0x2FA09, Mapped, "\u{29B30}", Unspecified),
    (0x2FA0A, 0x2FA0A, Mapped, "\u{9B12}", Unspecified),
    (0x2FA0B, 0x2FA0B, Mapped, "\u{9C40}", Unspecified),
    (0x2FA0C, 0x2FA0C, Mapped, "\u{9CFD}", Unspecified),
    (0x2FA0D, 0x2FA0D, Mapped, "\u{4CCE}", Unspecified),
    (0x2FA0E, 0x2FA0E, Mapped, "\u{4CED}", Unspecified),
    (0x2FA0F, 0x2FA0F, Mapped, "\u{9D67}", Unspecified),
    (0x2FA10, 0x2FA10, Mapped, "\u{2A0CE}", Unspecified),
    (0x2FA11, 0x2FA11, Mapped, "\u{4CF8}", Unspecified),
    (0x2FA12, 0x2FA12, Mapped, "\u{2A105}", Unspecified),
    (0x2FA13, 0x2FA13, Mapped, "\u{2A20E}", Unspecified),
    (0x2FA14, 0x2FA14, Mapped, "\u{2A291}", Unspecified),
    (0x2FA15, 0x2FA15, Mapped, "\u{9EBB}", Unspecified),
    (0x2FA16, 0x2FA16, Mapped, "\u{4D56}", Unspecified),
    (0x2FA17, 0x2FA17, Mapped, "\u{9EF9}", Unspecified),
    (0x2FA18, 0x2FA18, Mapped, "\u{9EFE}", Unspecified),
    (0x2FA19, 0x2FA19, Mapped, "\u{9F05}", Unspecified),
    (0x2FA1A, 0x2FA1A, Mapped, "\u{9F0F}", Unspecified),
    (0x2FA1B, 0x2FA1B, Mapped, "\u{9F16}", Unspecified),
    (0x2FA1C, 0x2FA1C, Mapped, "\u{9F3B}", Unspecified),
    (0x2FA1D, 0x2FA1D, Mapped, "\u{2A600}", Unspecified),
    (0x2FA1E, 0x2FFFF, Disallowed, "", Unspecified),
    (0x30000, 0x3134A, Valid, "", Unspecified),
    (0x3134B, 0xE00FF, Disallowed, "", Unspecified),
    (0xE0100, 0xE01EF, Ignored, "", Unspecified),
    (0xE01F0, 0x10FFFF, Disallowed, "", Unspecified),
];
