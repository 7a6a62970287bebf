// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! This module contains the ERC-20 `Transfer` event and `approve` call
//! definitions used to decode Frontier EVM activity.

use std::fmt::Debug;

use alloy_sol_types::sol;

/// The canonical Transfer event signature
pub const TRANSFER_EVENT_SIGNATURE: &str = "Transfer(address,address,uint256)";

sol! {
    event Transfer(address indexed from, address indexed to, uint256 value);
}

impl Debug for Transfer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Transfer(from: {}, to: {}, value: {})",
            self.from, self.to, self.value
        )
    }
}

/// The canonical approve function signature
pub const APPROVE_FUNCTION_SIGNATURE: &str = "approve(address,uint256)";

sol! {
    function approve(address _spender, uint256 _value) external returns (bool);
}

impl Debug for approveCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "approve(_spender: {}, _value: {})",
            self._spender, self._value
        )
    }
}
