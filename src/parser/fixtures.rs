//! `pwrstat -status` captures shared by the parser tests

pub const OUTPUT_NORMAL: &str = r#"
The UPS information shows as following:

	Properties:
		Model Name................... CP1500PFCLCDa
		Firmware Number.............. CR01802B7H21
		Rating Voltage............... 120 V
		Rating Power................. 1000 Watt(1500 VA)

	Current UPS status:
		State........................ Normal
		Power Supply by.............. Utility Power
		Utility Voltage.............. 122 V
		Output Voltage............... 122 V
		Battery Capacity............. 46 %
		Remaining Runtime............ 28 min.
		Load......................... 120 Watt(12 %)
		Line Interaction............. None
		Test Result.................. Passed at 2023/03/09 13:25:33
		Last Power Event............. Blackout at 2023/03/09 12:55:09 for 3 sec.
"#;

pub const OUTPUT_BLACKOUT: &str = r#"
The UPS information shows as following:

	Properties:
		Model Name................... CP1500PFCLCDa
		Firmware Number.............. CR01802B7H21
		Rating Voltage............... 120 V
		Rating Power................. 1000 Watt(1500 VA)

	Current UPS status:
		State........................ Power Failure
		Power Supply by.............. Battery Power
		Utility Voltage.............. 0 V
		Output Voltage............... 120 V
		Battery Capacity............. 39 %
		Remaining Runtime............ 24 min.
		Load......................... 120 Watt(12 %)
		Line Interaction............. None
		Test Result.................. Passed at 2023/03/09 13:25:33
		Last Power Event............. Blackout at 2023/03/09 13:38:21
"#;

pub const OUTPUT_LOST_COMM: &str = r#"
The UPS information shows as following:

	Properties:
		Model Name................... CP1500PFCLCDa
		Firmware Number.............. CR01802B7H21
		Rating Voltage............... 120 V
		Rating Power................. 1000 Watt(1500 VA)

	Current UPS status:
		State........................ Lost Communication
		Test Result.................. Passed at 2025/01/21 13:13:05
		Last Power Event............. Blackout at 2025/01/23 12:33:09

"#;
