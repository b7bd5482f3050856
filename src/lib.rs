#![no_std]

multiversx_sc::imports!();

pub mod token_proxy;

// ============================================================
// Failure reasons
// ============================================================

pub const ERR_TRANSFER_EXCEEDS_BALANCE: &str = "ERC20: transfer amount exceeds balance";
pub const ERR_TRANSFER_TO_ZERO: &str = "ERC20: transfer to the zero address";
pub const ERR_APPROVE_TO_ZERO: &str = "ERC20: approve to the zero address";
pub const ERR_INSUFFICIENT_ALLOWANCE: &str = "ERC20: insufficient allowance";
pub const ERR_ALLOWANCE_BELOW_ZERO: &str = "ERC20: decreased allowance below zero";
pub const ERR_BURN_EXCEEDS_BALANCE: &str = "ERC20 not enough funds";
pub const ERR_BURN_FROM_EXCEEDS_BALANCE: &str = "ERC20: not enough funds on account";

// ============================================================
// Contract
// ============================================================

/// Fungible token ledger: balances, total supply and a two-level
/// allowance table (owner -> spender -> amount).
///
/// Accounts and allowance cells are never registered: an address
/// that was never written reads as zero.
#[multiversx_sc::contract]
pub trait TokenLedger {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// The whole initial supply is credited to the deployer.
    #[init]
    fn init(
        &self,
        name: ManagedBuffer,
        symbol: ManagedBuffer,
        decimals: u8,
        initial_supply: BigUint,
    ) {
        let deployer = self.blockchain().get_caller();

        self.token_name().set(&name);
        self.token_symbol().set(&symbol);
        self.token_decimals().set(decimals);
        self.total_supply().set(&initial_supply);
        self.balances(&deployer).set(&initial_supply);

        self.transfer_event(&ManagedAddress::zero(), &deployer, &initial_supply);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: transfer
    // ========================================================

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(!to.is_zero(), ERR_TRANSFER_TO_ZERO);

        self.move_balance(&caller, &to, &amount);
    }

    // ========================================================
    // ENDPOINT: transferFrom
    // Spends allowance(from, caller).
    // ========================================================

    #[endpoint(transferFrom)]
    fn transfer_from(&self, from: ManagedAddress, to: ManagedAddress, amount: BigUint) {
        let spender = self.blockchain().get_caller();
        require!(!to.is_zero(), ERR_TRANSFER_TO_ZERO);

        let remaining = self.checked_allowance_spend(&from, &spender, &amount);
        self.move_balance(&from, &to, &amount);
        self.write_allowance(&from, &spender, &remaining);
    }

    // ========================================================
    // ENDPOINTS: allowances
    // `approve` overwrites the cell. Prefer the increase/decrease
    // pair: an overwrite racing a pending transferFrom lets the
    // spender consume both the old and the new allowance.
    // ========================================================

    #[endpoint(approve)]
    fn approve(&self, spender: ManagedAddress, amount: BigUint) {
        let owner = self.blockchain().get_caller();
        require!(!spender.is_zero(), ERR_APPROVE_TO_ZERO);

        self.write_allowance(&owner, &spender, &amount);
    }

    #[endpoint(increaseAllowance)]
    fn increase_allowance(&self, spender: ManagedAddress, delta: BigUint) {
        let owner = self.blockchain().get_caller();
        require!(!spender.is_zero(), ERR_APPROVE_TO_ZERO);

        let updated = self.allowances(&owner, &spender).get() + delta;
        self.write_allowance(&owner, &spender, &updated);
    }

    #[endpoint(decreaseAllowance)]
    fn decrease_allowance(&self, spender: ManagedAddress, delta: BigUint) {
        let owner = self.blockchain().get_caller();
        require!(!spender.is_zero(), ERR_APPROVE_TO_ZERO);

        let current = self.allowances(&owner, &spender).get();
        require!(current >= delta, ERR_ALLOWANCE_BELOW_ZERO);

        self.write_allowance(&owner, &spender, &(current - delta));
    }

    // ========================================================
    // ENDPOINTS: burn / burnFrom
    // Both shrink total supply by exactly the debited amount.
    // ========================================================

    #[endpoint(burn)]
    fn burn(&self, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        let balance = self.balances(&caller).get();
        require!(balance >= amount, ERR_BURN_EXCEEDS_BALANCE);

        self.destroy(&caller, balance, &amount);
    }

    #[endpoint(burnFrom)]
    fn burn_from(&self, owner: ManagedAddress, amount: BigUint) {
        let spender = self.blockchain().get_caller();

        let remaining = self.checked_allowance_spend(&owner, &spender, &amount);
        let balance = self.balances(&owner).get();
        require!(balance >= amount, ERR_BURN_FROM_EXCEEDS_BALANCE);

        self.destroy(&owner, balance, &amount);
        self.write_allowance(&owner, &spender, &remaining);
    }

    // ========================================================
    // INTERNAL
    // Every guard runs before the first storage write of a call.
    // ========================================================

    fn move_balance(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) {
        let from_balance = self.balances(from).get();
        require!(&from_balance >= amount, ERR_TRANSFER_EXCEEDS_BALANCE);

        // Read-modify-write in sequence so a self-transfer nets to zero.
        self.balances(from).set(&(from_balance - amount));
        self.balances(to).update(|balance| *balance += amount);

        self.transfer_event(from, to, amount);
    }

    /// Returns what is left of allowance(owner, spender) after spending
    /// `amount`, without writing it.
    fn checked_allowance_spend(
        &self,
        owner: &ManagedAddress,
        spender: &ManagedAddress,
        amount: &BigUint,
    ) -> BigUint {
        let current = self.allowances(owner, spender).get();
        require!(&current >= amount, ERR_INSUFFICIENT_ALLOWANCE);
        current - amount
    }

    fn write_allowance(&self, owner: &ManagedAddress, spender: &ManagedAddress, amount: &BigUint) {
        self.allowances(owner, spender).set(amount);
        self.approval_event(owner, spender, amount);
    }

    fn destroy(&self, owner: &ManagedAddress, balance: BigUint, amount: &BigUint) {
        self.balances(owner).set(&(balance - amount));
        self.total_supply().update(|supply| *supply -= amount);

        self.burn_event(owner, amount);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(name)]
    fn get_name(&self) -> ManagedBuffer {
        self.token_name().get()
    }

    #[view(symbol)]
    fn get_symbol(&self) -> ManagedBuffer {
        self.token_symbol().get()
    }

    #[view(decimals)]
    fn get_decimals(&self) -> u8 {
        self.token_decimals().get()
    }

    #[view(totalSupply)]
    fn get_total_supply(&self) -> BigUint {
        self.total_supply().get()
    }

    #[view(balanceOf)]
    fn balance_of(&self, address: ManagedAddress) -> BigUint {
        self.balances(&address).get()
    }

    #[view(allowance)]
    fn get_allowance(&self, owner: ManagedAddress, spender: ManagedAddress) -> BigUint {
        self.allowances(&owner, &spender).get()
    }

    /// Deployer. Carries no transfer rights.
    #[view(owner)]
    fn get_owner(&self) -> ManagedAddress {
        self.blockchain().get_owner_address()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("approval")]
    fn approval_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] spender: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("burn")]
    fn burn_event(&self, #[indexed] owner: &ManagedAddress, amount: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Metadata ──

    #[storage_mapper("name")]
    fn token_name(&self) -> SingleValueMapper<ManagedBuffer>;

    #[storage_mapper("symbol")]
    fn token_symbol(&self) -> SingleValueMapper<ManagedBuffer>;

    #[storage_mapper("decimals")]
    fn token_decimals(&self) -> SingleValueMapper<u8>;

    // ── Ledger ──

    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("balances")]
    fn balances(&self, address: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("allowances")]
    fn allowances(
        &self,
        owner: &ManagedAddress,
        spender: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;
}
